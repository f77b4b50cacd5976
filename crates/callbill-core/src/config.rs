//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use chrono_tz::Tz;
use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::Tariff;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub billing: BillingConfig,
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Tariff configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BillingConfig {
    /// Rate per minute up to the threshold
    #[serde(default = "default_rate_first_minutes")]
    pub rate_first_minutes: Decimal,

    /// Rate per minute after the threshold
    #[serde(default = "default_rate_after_threshold")]
    pub rate_after_threshold: Decimal,

    /// Minutes billed at the first rate
    #[serde(default = "default_threshold_minutes")]
    pub threshold_minutes: u32,
}

fn default_rate_first_minutes() -> Decimal {
    Decimal::new(10, 2)
}

fn default_rate_after_threshold() -> Decimal {
    Decimal::new(5, 2)
}

fn default_threshold_minutes() -> u32 {
    5
}

impl BillingConfig {
    pub fn tariff(&self) -> Tariff {
        Tariff::new(
            self.rate_first_minutes,
            self.rate_after_threshold,
            self.threshold_minutes,
        )
    }
}

/// Calendar conversion configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TimeConfig {
    /// IANA timezone used to derive call dates and times
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl TimeConfig {
    /// Parse the configured timezone
    pub fn tz(&self) -> Result<Tz, AppError> {
        Tz::from_str(&self.timezone).map_err(|_| {
            AppError::InvalidTimezone(format!(
                "'{}'. Use format like 'America/New_York', 'Europe/Lisbon', or 'UTC'",
                self.timezone
            ))
        })
    }
}

/// Call listing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Number of calls per listing page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(
            Environment::with_prefix("CALLBILL")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn load_with_env(environment: Environment) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("billing.rate_first_minutes", "0.10")?
            .set_default("billing.rate_after_threshold", "0.05")?
            .set_default("billing.threshold_minutes", 5)?
            .set_default("time.timezone", "UTC")?
            .set_default("store.page_size", 10)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with CALLBILL_ prefix
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("CALLBILL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            rate_first_minutes: default_rate_first_minutes(),
            rate_after_threshold: default_rate_after_threshold(),
            threshold_minutes: default_threshold_minutes(),
        }
    }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_billing_config() {
        let config = BillingConfig::default();
        assert_eq!(config.tariff(), Tariff::default());
        assert_eq!(config.rate_first_minutes, dec!(0.10));
    }

    #[test]
    fn test_default_timezone_is_utc() {
        let config = AppConfig::default();
        assert_eq!(config.time.tz().unwrap(), Tz::UTC);
        assert_eq!(config.store.page_size, 10);
    }

    #[test]
    fn test_invalid_timezone() {
        let config = TimeConfig {
            timezone: "Mars/Olympus_Mons".to_string(),
        };
        let err = config.tz().unwrap_err();
        assert_eq!(err.error_code(), "invalid_timezone");
    }

    #[test]
    fn test_default_config_file() {
        let config = AppConfig::from_file("../../config/default").unwrap();
        assert_eq!(config.billing.tariff(), Tariff::default());
        assert_eq!(config.time.tz().unwrap(), Tz::UTC);
        assert_eq!(config.store.page_size, 10);
    }

    #[test]
    fn test_env_overrides_reach_tariff() {
        let vars: config::Map<String, String> = [
            ("CALLBILL__BILLING__RATE_FIRST_MINUTES", "0.25"),
            ("CALLBILL__BILLING__THRESHOLD_MINUTES", "3"),
            ("CALLBILL__TIME__TIMEZONE", "Europe/Lisbon"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = AppConfig::load_with_env(
            Environment::with_prefix("CALLBILL")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars)),
        )
        .unwrap();

        assert_eq!(
            config.billing.tariff(),
            Tariff::new(dec!(0.25), dec!(0.05), 3)
        );
        assert_eq!(config.time.tz().unwrap().name(), "Europe/Lisbon");
        assert_eq!(config.store.page_size, 10);
    }

    #[test]
    fn test_explicit_timezone() {
        let config = TimeConfig {
            timezone: "Europe/Lisbon".to_string(),
        };
        assert_eq!(config.tz().unwrap().name(), "Europe/Lisbon");
    }
}
