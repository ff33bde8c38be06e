//! Handlers for the `account` and `dealer` command groups.
//!
//! Accounts and dealers have no HTTP endpoint; operators register them here
//! and hand the printed ids to callers.

use crate::adapter::inbound::cli::command::{AccountAddArgs, DealerAddArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::sqlite::{create_pool, SqliteStore};
use crate::application::OpportunityService;
use crate::domain::{Account, Dealer};
use crate::error::{Result, ServiceError};
use crate::infrastructure::config::Config;
use crate::port::outbound::store::Store;

fn open_service(config: &Config) -> Result<OpportunityService<SqliteStore>> {
    let pool = create_pool(&config.database.url, config.database.pool_options())?;
    Ok(OpportunityService::new(SqliteStore::new(pool)))
}

/// Execute `account add <name>`.
pub async fn execute_account_add(
    config: &Config,
    args: &AccountAddArgs,
) -> std::result::Result<(), ServiceError> {
    let service = open_service(config)?;
    add_account(&service, args).await.map(|_| ())
}

/// Execute `dealer add --code <code> --owner <owner>`.
pub async fn execute_dealer_add(
    config: &Config,
    args: &DealerAddArgs,
) -> std::result::Result<(), ServiceError> {
    let service = open_service(config)?;
    add_dealer(&service, args).await.map(|_| ())
}

async fn add_account<S: Store>(
    service: &OpportunityService<S>,
    args: &AccountAddArgs,
) -> std::result::Result<Account, ServiceError> {
    let account = service.provision_account(&args.name).await?;
    output::success(&format!("Registered account '{}'", account.name));
    output::value("account_id", &account.id);
    Ok(account)
}

async fn add_dealer<S: Store>(
    service: &OpportunityService<S>,
    args: &DealerAddArgs,
) -> std::result::Result<Dealer, ServiceError> {
    let dealer = service.provision_dealer(&args.code, &args.owner).await?;
    output::success(&format!("Registered dealer '{}' ({})", dealer.owner, dealer.code));
    output::value("dealer_id", &dealer.id);
    Ok(dealer)
}
