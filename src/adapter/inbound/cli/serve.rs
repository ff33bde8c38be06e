//! Handler for the `serve` command.

use std::future::Future;

use tracing::{info, warn};

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::http;
use crate::adapter::outbound::sqlite::{create_pool, SqliteStore};
use crate::application::OpportunityService;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::store::Store;

/// Apply command-line overrides on top of the loaded configuration.
///
/// # Errors
///
/// Returns an error if the overridden `[server]` section no longer
/// validates, e.g. `--port 0`.
#[allow(clippy::result_large_err)]
pub fn apply_overrides(mut config: Config, args: &ServeArgs) -> Result<Config> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.server.validate()?;
    Ok(config)
}

/// Execute `serve`: run the HTTP API until `shutdown` resolves.
pub async fn execute<F>(config: Config, args: &ServeArgs, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let config = apply_overrides(config, args)?;
    let addr = config.server.socket_addr()?;

    let pool = create_pool(&config.database.url, config.database.pool_options())?;
    let store = SqliteStore::new(pool);
    if let Err(e) = store.ping().await {
        warn!(error = %e, database = %config.database.url, "database not reachable at startup");
    }

    let service = OpportunityService::new(store);
    let router = http::build_router(service, config.server.max_payload_bytes);

    info!(
        database = %config.database.url,
        pool_size = config.database.pool_size,
        "starting http server"
    );
    http::serve(router, addr, shutdown).await
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::{ConfigError, Error};

    fn free_port() -> u16 {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let args = ServeArgs {
            host: None,
            port: Some(9090),
        };
        let config = apply_overrides(Config::default(), &args).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn no_overrides_keeps_config() {
        let config = apply_overrides(Config::default(), &ServeArgs::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn port_zero_override_is_rejected() {
        let args = ServeArgs {
            host: None,
            port: Some(0),
        };
        let err = apply_overrides(Config::default(), &args).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "server.port",
                ..
            })
        ));
    }

    #[test]
    fn hostname_override_is_rejected() {
        let args = ServeArgs {
            host: Some("localhost".into()),
            port: None,
        };
        assert!(apply_overrides(Config::default(), &args).is_err());
    }

    #[tokio::test]
    async fn port_zero_never_binds() {
        let args = ServeArgs {
            host: None,
            port: Some(0),
        };
        let result = execute(Config::default(), &args, std::future::pending()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn serves_until_shutdown_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.database.url = dir.path().join("serve.db").display().to_string();
        let args = ServeArgs {
            host: None,
            port: Some(free_port()),
        };

        let shutdown = tokio::time::sleep(Duration::from_millis(100));
        let result =
            tokio::time::timeout(Duration::from_secs(10), execute(config, &args, shutdown)).await;

        assert!(matches!(result, Ok(Ok(()))), "{result:?}");
    }
}
