//! Seeded services and schema setup.

use diesel::connection::SimpleConnection;

use crate::adapter::outbound::sqlite::database::schema::SCHEMA_SQL;
use crate::adapter::outbound::sqlite::DbPool;
use crate::application::OpportunityService;
use crate::domain::{Account, Dealer};
use crate::error::{Error, Result, ServiceError};
use crate::port::outbound::store::Store;

/// A service with one account ("Acme") and one dealer (C1, "Alice").
pub struct Seeded<S> {
    pub service: OpportunityService<S>,
    pub account: Account,
    pub dealer: Dealer,
}

/// Provision the standard account and dealer into `store`.
///
/// # Errors
///
/// Returns an error if either insert fails.
pub async fn seed<S: Store>(store: S) -> std::result::Result<Seeded<S>, ServiceError> {
    let service = OpportunityService::new(store);
    let account = service.provision_account("Acme").await?;
    let dealer = service.provision_dealer("C1", "Alice").await?;
    Ok(Seeded {
        service,
        account,
        dealer,
    })
}

/// Create the tables from `sql/schema.sql` on a pooled connection.
///
/// # Errors
///
/// Returns an error if no connection is available or the DDL fails.
pub fn apply_schema(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    conn.batch_execute(SCHEMA_SQL)?;
    Ok(())
}
