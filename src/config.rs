//! Configuration module
//!
//! Loads configuration for the demo driver from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (development, production)
    pub environment: String,

    /// JSON file with `[{"email", "name"}]` entries; built-in users when unset
    pub seed_file: Option<PathBuf>,

    /// Amount deposited in the scripted run
    pub deposit_amount: Decimal,

    /// Amount withdrawn in the scripted run
    pub withdraw_amount: Decimal,

    /// Amount sent between users in the scripted run
    pub send_amount: Decimal,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let seed_file = match lookup("WALLET_SEED_FILE") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("WALLET_SEED_FILE"))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        let deposit_amount = decimal_var(&lookup, "DEMO_DEPOSIT_AMOUNT", "255.50")?;
        let withdraw_amount = decimal_var(&lookup, "DEMO_WITHDRAW_AMOUNT", "50")?;
        let send_amount = decimal_var(&lookup, "DEMO_SEND_AMOUNT", "52.50")?;

        Ok(Self {
            environment,
            seed_file,
            deposit_amount,
            withdraw_amount,
            send_amount,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn decimal_var<F>(lookup: &F, name: &'static str, default: &str) -> Result<Decimal, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name).unwrap_or_else(|| default.to_string());
    Decimal::from_str(raw.trim()).map_err(|_| ConfigError::InvalidValue(name))
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
        assert!(config.seed_file.is_none());
        assert_eq!(config.deposit_amount, dec!(255.50));
        assert_eq!(config.withdraw_amount, dec!(50));
        assert_eq!(config.send_amount, dec!(52.50));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("ENVIRONMENT", "production"),
            ("WALLET_SEED_FILE", "/tmp/seed.json"),
            ("DEMO_DEPOSIT_AMOUNT", " 10.25 "),
            ("DEMO_WITHDRAW_AMOUNT", "1"),
            ("DEMO_SEND_AMOUNT", "0.001"),
        ])
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.deposit_amount, dec!(10.25));
        assert_eq!(config.withdraw_amount, dec!(1));
        assert_eq!(config.send_amount, dec!(0.001));
    }

    #[test]
    fn test_empty_seed_file_rejected() {
        let result = config_from(&[("WALLET_SEED_FILE", "  ")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue("WALLET_SEED_FILE"))
        ));
    }

    #[test]
    fn test_invalid_amount_rejected() {
        let result = config_from(&[("DEMO_SEND_AMOUNT", "lots")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue("DEMO_SEND_AMOUNT"))
        ));
    }
}
