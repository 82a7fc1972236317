//! Shared types, errors, and configuration for Moneta.
//!
//! This crate provides common types used across all other crates:
//! - The closed set of supported currencies
//! - Typed IDs for persisted records
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, RatesConfig};
pub use error::{AppError, AppResult};
pub use types::{Currency, MoneyRecordId};
