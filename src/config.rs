//! Configuration management for phone-display.
//!
//! Settings for the demo binary are read from environment variables, with
//! an optional `.env` file loaded first.

use crate::domain::{PhoneNumber, Sex};
use crate::error::{ConfigError, ConfigResult};
use std::env;

const DEFAULT_DEMO_NUMBER: &str = "4008123123";
const DEFAULT_DIRECTORY_NAME: &str = "Manhattan residential phone directory";

/// Configuration for the demo binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number formatted by the demo (default: 4008123123)
    pub demo_number: PhoneNumber,

    /// Sex on the demo contact card (default: male)
    pub demo_sex: Sex,

    /// Intimacy on the demo contact card (default: 29)
    pub demo_intimacy: u32,

    /// Name of the demo directory
    pub directory_name: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `PHONE_DEMO_NUMBER`: ten-digit or `AAA-PPP-LLLL` number
    /// - `PHONE_DEMO_SEX`: `male` or `female`
    /// - `PHONE_DEMO_INTIMACY`: non-negative integer
    /// - `PHONE_DIRECTORY_NAME`: non-blank directory name
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let demo_number = match env::var("PHONE_DEMO_NUMBER") {
            Ok(val) => val.parse().map_err(|e| ConfigError::InvalidValue {
                var: "PHONE_DEMO_NUMBER".to_string(),
                reason: format!("{}", e),
            })?,
            Err(_) => Self::default_number(),
        };

        let demo_sex = match env::var("PHONE_DEMO_SEX") {
            Ok(val) => val.parse().map_err(|e| ConfigError::InvalidValue {
                var: "PHONE_DEMO_SEX".to_string(),
                reason: format!("{}", e),
            })?,
            Err(_) => Sex::Male,
        };

        let demo_intimacy = Self::parse_env_u32("PHONE_DEMO_INTIMACY", 29)?;

        let directory_name = env::var("PHONE_DIRECTORY_NAME")
            .unwrap_or_else(|_| DEFAULT_DIRECTORY_NAME.to_string());
        if directory_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_DIRECTORY_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            demo_number,
            demo_sex,
            demo_intimacy,
            directory_name,
            log_level,
        })
    }

    fn default_number() -> PhoneNumber {
        // SAFETY: The literal is ten ASCII digits
        PhoneNumber::new(DEFAULT_DEMO_NUMBER).expect("default demo number is valid")
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            demo_number: Self::default_number(),
            demo_sex: Sex::Male,
            demo_intimacy: 29,
            directory_name: DEFAULT_DIRECTORY_NAME.to_string(),
            log_level: "error".to_string(),
        }
    }
}
