//! HTTP listener configuration.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on request body size.
    pub max_payload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            max_payload_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Resolve the bind address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `host` is not an IP address.
    #[allow(clippy::result_large_err)]
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e| ConfigError::InvalidValue {
            field: "server.host",
            reason: format!("'{}' is not an IP address: {e}", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    #[allow(clippy::result_large_err)]
    pub(crate) fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "server.host",
            }
            .into());
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.max_payload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_payload_bytes",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        self.socket_addr().map(|_| ())
    }
}
