//! Closed set of currencies known to the system.
//!
//! Every currency carries a display symbol, the number of decimal places
//! used when formatting, and a stable integer code used by persisted
//! records. EUR is the pivot currency: all exchange rates are expressed
//! against it.

use serde::{Deserialize, Serialize};

/// Currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Argentine Peso
    Ars,
    /// US Dollar
    Usd,
    /// Australian Dollar
    Aud,
    /// Norwegian Krone
    Nok,
    /// Brazilian Real
    Brl,
    /// Bulgarian Lev
    Bgn,
    /// Canadian Dollar
    Cad,
    /// Chinese Yuan
    Cny,
    /// New Zealand Dollar
    Nzd,
    /// Croatian Kuna
    Hrk,
    /// Czech Koruna
    Czk,
    /// Danish Krone
    Dkk,
    /// Euro
    Eur,
    /// Hong Kong Dollar
    Hkd,
    /// Hungarian Forint
    Huf,
    /// Japanese Yen
    Jpy,
    /// Indian Rupee
    Inr,
    /// Indonesian Rupiah
    Idr,
    /// Israeli New Shekel
    Ils,
    /// Icelandic Krona
    Isk,
    /// Swiss Franc
    Chf,
    /// Malaysian Ringgit
    Myr,
    /// Mexican Peso
    Mxn,
    /// Philippine Peso
    Php,
    /// Polish Zloty
    Pln,
    /// Romanian Leu
    Ron,
    /// Russian Ruble
    Rub,
    /// Singapore Dollar
    Sgd,
    /// Turkish Lira
    Try,
    /// Pound Sterling
    Gbp,
    /// South Korean Won
    Krw,
    /// Swedish Krona
    Sek,
    /// Thai Baht
    Thb,
    /// South African Rand
    Zar,
}

impl Currency {
    /// The currency every exchange rate is expressed against.
    pub const PIVOT: Self = Self::Eur;

    /// Every supported currency, ordered by code.
    pub const ALL: [Self; 34] = [
        Self::Ars,
        Self::Usd,
        Self::Aud,
        Self::Nok,
        Self::Brl,
        Self::Bgn,
        Self::Cad,
        Self::Cny,
        Self::Nzd,
        Self::Hrk,
        Self::Czk,
        Self::Dkk,
        Self::Eur,
        Self::Hkd,
        Self::Huf,
        Self::Jpy,
        Self::Inr,
        Self::Idr,
        Self::Ils,
        Self::Isk,
        Self::Chf,
        Self::Myr,
        Self::Mxn,
        Self::Php,
        Self::Pln,
        Self::Ron,
        Self::Rub,
        Self::Sgd,
        Self::Try,
        Self::Gbp,
        Self::Krw,
        Self::Sek,
        Self::Thb,
        Self::Zar,
    ];

    /// Returns true for the pivot currency.
    #[must_use]
    pub const fn is_pivot(self) -> bool {
        matches!(self, Self::Eur)
    }

    /// Stable integer code stored in persisted records.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Ars => 2,
            Self::Usd => 4,
            Self::Aud => 11,
            Self::Nok => 25,
            Self::Brl => 26,
            Self::Bgn => 28,
            Self::Cad => 32,
            Self::Cny => 36,
            Self::Nzd => 39,
            Self::Hrk => 41,
            Self::Czk => 44,
            Self::Dkk => 46,
            Self::Eur => 47,
            Self::Hkd => 66,
            Self::Huf => 67,
            Self::Jpy => 68,
            Self::Inr => 69,
            Self::Idr => 70,
            Self::Ils => 73,
            Self::Isk => 75,
            Self::Chf => 87,
            Self::Myr => 93,
            Self::Mxn => 98,
            Self::Php => 116,
            Self::Pln => 117,
            Self::Ron => 119,
            Self::Rub => 124,
            Self::Sgd => 129,
            Self::Try => 133,
            Self::Gbp => 134,
            Self::Krw => 135,
            Self::Sek => 141,
            Self::Thb => 146,
            Self::Zar => 150,
        }
    }

    /// Looks up a currency by its persisted integer code.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ars | Self::Mxn => "$",
            Self::Usd => "US$",
            Self::Aud => "A$",
            Self::Nok | Self::Dkk | Self::Isk | Self::Sek => "kr",
            Self::Brl => "R$",
            Self::Bgn => "лв",
            Self::Cad => "C$",
            Self::Cny => "CN¥",
            Self::Nzd => "NZ$",
            Self::Hrk => "kn",
            Self::Czk => "Kč",
            Self::Eur => "€",
            Self::Hkd => "HK$",
            Self::Huf => "Ft",
            Self::Jpy => "¥",
            Self::Inr => "₹",
            Self::Idr => "Rp",
            Self::Ils => "₪",
            Self::Chf => "CHF",
            Self::Myr => "RM",
            Self::Php => "₱",
            Self::Pln => "zł",
            Self::Ron => "lei",
            Self::Rub => "₽",
            Self::Sgd => "S$",
            Self::Try => "₺",
            Self::Gbp => "£",
            Self::Krw => "₩",
            Self::Thb => "฿",
            Self::Zar => "R",
        }
    }

    /// Number of decimal places shown when formatting an amount.
    #[must_use]
    pub const fn decimals(self) -> u32 {
        match self {
            Self::Jpy | Self::Krw | Self::Isk => 0,
            _ => 2,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::Ars => "ARS",
            Self::Usd => "USD",
            Self::Aud => "AUD",
            Self::Nok => "NOK",
            Self::Brl => "BRL",
            Self::Bgn => "BGN",
            Self::Cad => "CAD",
            Self::Cny => "CNY",
            Self::Nzd => "NZD",
            Self::Hrk => "HRK",
            Self::Czk => "CZK",
            Self::Dkk => "DKK",
            Self::Eur => "EUR",
            Self::Hkd => "HKD",
            Self::Huf => "HUF",
            Self::Jpy => "JPY",
            Self::Inr => "INR",
            Self::Idr => "IDR",
            Self::Ils => "ILS",
            Self::Isk => "ISK",
            Self::Chf => "CHF",
            Self::Myr => "MYR",
            Self::Mxn => "MXN",
            Self::Php => "PHP",
            Self::Pln => "PLN",
            Self::Ron => "RON",
            Self::Rub => "RUB",
            Self::Sgd => "SGD",
            Self::Try => "TRY",
            Self::Gbp => "GBP",
            Self::Krw => "KRW",
            Self::Sek => "SEK",
            Self::Thb => "THB",
            Self::Zar => "ZAR",
        };
        f.write_str(code)
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.to_string() == wanted)
            .ok_or_else(|| format!("Unknown currency: {s}"))
    }
}
