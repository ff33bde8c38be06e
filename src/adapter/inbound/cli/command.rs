//! Command-line interface definitions.
//!
//! Defines the CLI structure for the dealerdesk application using `clap`:
//! the HTTP server plus a few operator commands for provisioning accounts
//! and dealers out-of-band.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Dealer-scoped sales opportunity tracking service
#[derive(Parser, Debug)]
#[command(name = "dealerdesk")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API until interrupted
    Serve(ServeArgs),

    /// Manage customer accounts
    #[command(subcommand)]
    Account(AccountCommand),

    /// Manage dealers
    #[command(subcommand)]
    Dealer(DealerCommand),

    /// Print the stage label for a win probability
    Stage(StageArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `dealerdesk serve`.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Bind address, overriding `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port, overriding `server.port`
    #[arg(long)]
    pub port: Option<u16>,
}

/// Subcommands for `dealerdesk account`.
#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Register a new account and print its id
    Add(AccountAddArgs),
}

#[derive(Args, Debug)]
pub struct AccountAddArgs {
    /// Account name, as callers will reference it
    pub name: String,
}

/// Subcommands for `dealerdesk dealer`.
#[derive(Subcommand, Debug)]
pub enum DealerCommand {
    /// Register a new dealer and print its id
    Add(DealerAddArgs),
}

#[derive(Args, Debug)]
pub struct DealerAddArgs {
    /// Dealer code
    #[arg(long)]
    pub code: String,

    /// Opportunity owner name
    #[arg(long)]
    pub owner: String,
}

/// Arguments for `dealerdesk stage`.
#[derive(Args, Debug)]
pub struct StageArgs {
    /// Win probability in percent
    #[arg(allow_negative_numbers = true)]
    pub probability: i64,
}

/// Subcommands for `dealerdesk config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Load and validate the configuration file
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_defaults_to_local_file() {
        let cli = parse(&["dealerdesk", "stage", "10"]);
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(!cli.json);
    }

    #[test]
    fn stage_accepts_negative_probability() {
        let cli = parse(&["dealerdesk", "stage", "-5"]);
        match cli.command {
            Commands::Stage(args) => assert_eq!(args.probability, -5),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn dealer_add_requires_code_and_owner() {
        assert!(Cli::try_parse_from(["dealerdesk", "dealer", "add", "--code", "C1"]).is_err());

        let cli = parse(&["dealerdesk", "dealer", "add", "--code", "C1", "--owner", "Alice"]);
        match cli.command {
            Commands::Dealer(DealerCommand::Add(args)) => {
                assert_eq!(args.code, "C1");
                assert_eq!(args.owner, "Alice");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = parse(&["dealerdesk", "serve", "--port", "8080", "--config", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
