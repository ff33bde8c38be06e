//! SQLite store implementation.
//!
//! Implements every store port on top of a Diesel connection pool. Each call
//! checks a connection out of the pool on tokio's blocking thread pool and
//! releases it when the call finishes, whether it succeeded or not.

use std::str::FromStr;

use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use super::database::connection::DbPool;
use super::database::model::{AccountRow, DealerRow, OpportunityRow};
use super::database::schema::{account, dealer, opportunity};
use crate::domain::{
    Account, AccountId, Dealer, DealerId, DealerIdentity, Opportunity, OpportunityId, Stage,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::{AccountStore, DealerStore, OpportunityStore, Store};

/// SQLite-backed store.
#[derive(Clone)]
pub struct SqliteStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteStore {
    /// Create a new SQLite store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run `op` with a pooled connection off the async executor.
    async fn with_connection<F, T>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
            op(&mut conn)
        })
        .await?
    }

    fn account_from_row(row: AccountRow) -> Account {
        Account {
            id: AccountId::from(row.account_id),
            name: row.account_name,
        }
    }

    fn dealer_from_row(row: DealerRow) -> Dealer {
        Dealer {
            id: DealerId::from(row.dealer_id),
            code: row.dealer_code,
            owner: row.opportunity_owner,
        }
    }

    fn opportunity_to_row(opp: &Opportunity) -> OpportunityRow {
        OpportunityRow {
            opportunity_id: opp.id.to_string(),
            opportunity_name: opp.name.clone(),
            account_id: opp.account_id.to_string(),
            close_date: opp.close_date,
            amount: opp.amount.to_string(),
            description: opp.description.clone(),
            dealer_id: opp.dealer_id.to_string(),
            dealer_code: opp.dealer_code.clone(),
            dealer_name_or_opportunity_owner: opp.owner.clone(),
            stage: opp.stage.as_str().to_owned(),
            probability: opp.probability,
            next_step: opp.next_step.clone(),
            created_date: opp.created_at,
        }
    }

    fn opportunity_from_row(row: OpportunityRow) -> Result<Opportunity> {
        let amount = Decimal::from_str(&row.amount).map_err(|e| {
            Error::Parse(format!(
                "opportunity {} has invalid amount '{}': {e}",
                row.opportunity_id, row.amount
            ))
        })?;
        let stage = Stage::from_str(&row.stage)?;

        Ok(Opportunity {
            id: OpportunityId::from(row.opportunity_id),
            name: row.opportunity_name,
            account_id: AccountId::from(row.account_id),
            close_date: row.close_date,
            amount,
            description: row.description,
            dealer_id: DealerId::from(row.dealer_id),
            dealer_code: row.dealer_code,
            owner: row.dealer_name_or_opportunity_owner,
            stage,
            probability: row.probability,
            next_step: row.next_step,
            created_at: row.created_date,
        })
    }
}

impl AccountStore for SqliteStore {
    async fn insert_account(&self, acct: &Account) -> Result<()> {
        let row = AccountRow {
            account_id: acct.id.to_string(),
            account_name: acct.name.clone(),
        };
        self.with_connection(move |conn| {
            diesel::insert_into(account::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
        .await
    }

    async fn find_account_by_name(&self, name: &str) -> Result<Option<Account>> {
        let name = name.to_owned();
        self.with_connection(move |conn| {
            let row = account::table
                .filter(account::account_name.eq(&name))
                .select(AccountRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Self::account_from_row))
        })
        .await
    }
}

impl DealerStore for SqliteStore {
    async fn insert_dealer(&self, d: &Dealer) -> Result<()> {
        let row = DealerRow {
            dealer_id: d.id.to_string(),
            dealer_code: d.code.clone(),
            opportunity_owner: d.owner.clone(),
        };
        self.with_connection(move |conn| {
            diesel::insert_into(dealer::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
        .await
    }

    async fn find_dealer(&self, identity: &DealerIdentity) -> Result<Option<Dealer>> {
        let identity = identity.clone();
        self.with_connection(move |conn| {
            let row = dealer::table
                .filter(dealer::dealer_id.eq(identity.id.as_str()))
                .filter(dealer::dealer_code.eq(&identity.code))
                .filter(dealer::opportunity_owner.eq(&identity.owner))
                .select(DealerRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Self::dealer_from_row))
        })
        .await
    }
}

impl OpportunityStore for SqliteStore {
    async fn insert_opportunity(&self, opp: &Opportunity) -> Result<()> {
        let row = Self::opportunity_to_row(opp);
        self.with_connection(move |conn| {
            diesel::insert_into(opportunity::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
        .await
    }

    async fn list_by_dealer_code(&self, dealer_code: &str) -> Result<Vec<Opportunity>> {
        let dealer_code = dealer_code.to_owned();
        self.with_connection(move |conn| {
            let rows: Vec<OpportunityRow> = opportunity::table
                .filter(opportunity::dealer_code.eq(&dealer_code))
                .select(OpportunityRow::as_select())
                .load(conn)?;
            rows.into_iter().map(Self::opportunity_from_row).collect()
        })
        .await
    }

    async fn find_for_dealer(
        &self,
        id: &OpportunityId,
        dealer_id: &DealerId,
    ) -> Result<Option<Opportunity>> {
        let id = id.clone();
        let dealer_id = dealer_id.clone();
        self.with_connection(move |conn| {
            let row: Option<OpportunityRow> = opportunity::table
                .filter(opportunity::opportunity_id.eq(id.as_str()))
                .filter(opportunity::dealer_id.eq(dealer_id.as_str()))
                .select(OpportunityRow::as_select())
                .first(conn)
                .optional()?;
            row.map(Self::opportunity_from_row).transpose()
        })
        .await
    }
}

impl Store for SqliteStore {
    async fn ping(&self) -> Result<()> {
        self.with_connection(|conn| {
            diesel::sql_query("SELECT 1").execute(conn)?;
            Ok(())
        })
        .await
    }
}
