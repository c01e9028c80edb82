//! Application configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                | Default      |
//! |-------------------------|--------------|
//! | `STOCK_DB_PATH`         | `estoque.db` |
//! | `STOCK_MAX_CONNECTIONS` | `1`          |
//! | `STOCK_CURRENCY_SYMBOL` | `R$`         |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use stock_db::DbConfig;

pub const DEFAULT_DB_PATH: &str = "estoque.db";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// Application configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database file (`:memory:` for a throwaway session)
    pub database_path: PathBuf,

    /// Connection pool size
    pub max_connections: u32,

    /// Prefix printed before prices in listings
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            max_connections: 1,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let database_path = match lookup("STOCK_DB_PATH") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("STOCK_DB_PATH".to_string()))
            }
            Some(path) => PathBuf::from(path),
            None => defaults.database_path,
        };

        let max_connections = match lookup("STOCK_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue("STOCK_MAX_CONNECTIONS".to_string()))?,
            None => defaults.max_connections,
        };

        let currency_symbol = lookup("STOCK_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);

        Ok(AppConfig {
            database_path,
            max_connections,
            currency_symbol,
        })
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        let config = DbConfig::new(self.database_path.clone());
        if config.is_in_memory() {
            // A second connection would open a different, empty database
            return DbConfig::in_memory();
        }
        config.max_connections(self.max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
