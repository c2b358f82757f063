//! Configuration management for the contact manager binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file loaded first.

use crate::error::{ConfigError, ConfigResult};
use crate::seed::ImportMode;
use std::env;
use std::path::PathBuf;

/// Configuration for the contact manager binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file of contacts to import at startup (optional)
    pub contacts_file: Option<PathBuf>,

    /// How the startup import treats invalid rows (default: lenient)
    pub import_mode: ImportMode,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: CSV file of `first,last,phone` rows to import
    /// - `CONTACTS_IMPORT_MODE`: `strict` or `lenient` (default: lenient)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let contacts_file = match env::var("CONTACTS_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => None,
        };

        let import_mode = match env::var("CONTACTS_IMPORT_MODE") {
            Ok(val) => val.parse::<ImportMode>().map_err(|reason| ConfigError::InvalidValue {
                var: "CONTACTS_IMPORT_MODE".to_string(),
                reason,
            })?,
            Err(_) => ImportMode::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            contacts_file,
            import_mode,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: None,
            import_mode: ImportMode::Lenient,
            log_level: "warn".to_string(),
        }
    }
}
