//! Database configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::sqlite::PoolOptions;
use crate::error::{ConfigError, Result};

/// Environment variable that replaces `database.url` when set.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// `[database]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database path or URL.
    pub url: String,
    pub pool_size: u32,
    pub busy_timeout_ms: u64,
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "dealerdesk.db".into(),
            pool_size: 5,
            busy_timeout_ms: 5000,
            connection_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_size: self.pool_size,
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
            connection_timeout: Duration::from_secs(self.connection_timeout_secs),
        }
    }

    #[allow(clippy::result_large_err)]
    pub(crate) fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.url",
            }
            .into());
        }
        let positive = [
            ("database.pool_size", u64::from(self.pool_size)),
            ("database.busy_timeout_ms", self.busy_timeout_ms),
            ("database.connection_timeout_secs", self.connection_timeout_secs),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_options_convert_units() {
        let config = DatabaseConfig {
            pool_size: 2,
            busy_timeout_ms: 750,
            connection_timeout_secs: 3,
            ..DatabaseConfig::default()
        };
        let options = config.pool_options();
        assert_eq!(options.max_size, 2);
        assert_eq!(options.busy_timeout, Duration::from_millis(750));
        assert_eq!(options.connection_timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_pool_size_is_invalid() {
        let config = DatabaseConfig {
            pool_size: 0,
            ..DatabaseConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("database.pool_size"), "{err}");
    }
}
