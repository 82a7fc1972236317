//! Application configuration management.
//!
//! The money core has no configuration of its own. Host applications load
//! an [`AppConfig`] and build their rate table from [`RatesConfig`].

use std::collections::BTreeMap;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Exchange rate table configuration.
    pub rates: RatesConfig,
}

/// Exchange rate table configuration.
///
/// Rates are units of the keyed currency per one unit of the pivot currency.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Start from the built-in reference rates.
    #[serde(default = "default_use_reference")]
    pub use_reference: bool,
    /// Rates keyed by ISO code, applied on top of the reference rates.
    #[serde(default)]
    pub overrides: BTreeMap<String, f64>,
}

fn default_use_reference() -> bool {
    true
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            use_reference: default_use_reference(),
            overrides: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default.toml`,
    /// `config/{RUN_MODE}.toml`, then `MONETA__*` environment variables
    /// (for example `MONETA__RATES__OVERRIDES__USD=1.1`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MONETA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
