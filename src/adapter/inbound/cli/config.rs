//! Handler for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::Config;

/// Execute `config check`.
pub fn execute_check(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    print_summary(path, &config);
    Ok(())
}

fn print_summary(path: &Path, config: &Config) {
    output::success(&format!("{} is valid", path.display()));

    output::section("Server");
    output::field("Address", format!("{}:{}", config.server.host, config.server.port));
    output::field("Max payload", format!("{} bytes", config.server.max_payload_bytes));

    output::section("Database");
    output::field("URL", &config.database.url);
    output::field("Pool size", config.database.pool_size);
    output::field("Busy timeout", format!("{} ms", config.database.busy_timeout_ms));
    output::field("Checkout wait", format!("{} s", config.database.connection_timeout_secs));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    let format = match config.logging.format {
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    };
    output::field("Format", format);

    if std::env::var_os("RUST_LOG").is_some() {
        output::note("RUST_LOG is set and overrides the configured level");
    }
}
