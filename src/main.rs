use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dealerdesk::adapter::inbound::cli::command::{
    AccountCommand, Cli, Commands, ConfigCommand, DealerCommand,
};
use dealerdesk::adapter::inbound::cli::output::{self, OutputConfig};
use dealerdesk::adapter::inbound::cli::{config, provision, serve, stage};
use dealerdesk::infrastructure::config::Config;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Stage(args) => {
            stage::execute(&args);
        }
        Commands::Config(ConfigCommand::Check) => {
            config::execute_check(&cli.config)?;
        }
        Commands::Serve(args) => {
            let config = load_config(&cli.config)?;
            config.init_logging();
            info!("dealerdesk starting");

            serve::execute(config, &args, shutdown_signal()).await?;

            info!("dealerdesk stopped");
        }
        Commands::Account(AccountCommand::Add(args)) => {
            let config = load_config(&cli.config)?;
            config.init_logging();
            provision::execute_account_add(&config, &args).await?;
        }
        Commands::Dealer(DealerCommand::Add(args)) => {
            let config = load_config(&cli.config)?;
            config.init_logging();
            provision::execute_dealer_add(&config, &args).await?;
        }
    }
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load(path).with_context(|| format!("failed to load {}", path.display()))
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
