//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file. Every section is optional and
//! falls back to its defaults, and the `DATABASE_URL` environment variable
//! replaces `database.url` so credentials can stay out of the file.
//!
//! # Example
//!
//! ```no_run
//! use dealerdesk::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::database::{DatabaseConfig, DATABASE_URL_ENV};
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML, applying the `DATABASE_URL` override
    /// from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value fails validation.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with(content, std::env::var(DATABASE_URL_ENV).ok())
    }

    /// Parse configuration from TOML with an explicit database URL override.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value fails validation.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with(content: &str, database_url: Option<String>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
            config.database.url = url;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Initialize the global tracing subscriber.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
