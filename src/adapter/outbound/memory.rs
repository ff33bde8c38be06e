//! In-memory store implementation for testing.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::domain::{Account, Dealer, DealerId, DealerIdentity, Opportunity, OpportunityId};
use crate::error::{Error, Result};
use crate::port::outbound::store::{AccountStore, DealerStore, OpportunityStore, Store};

/// In-memory store for testing purposes.
///
/// Records are kept in insertion order. [`MemoryStore::set_unavailable`]
/// makes every operation fail with a connection error.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<Vec<Account>>,
    dealers: RwLock<Vec<Dealer>>,
    opportunities: RwLock<Vec<Opportunity>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the backing database going away (or coming back).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored opportunities.
    pub fn opportunity_count(&self) -> usize {
        self.opportunities.read().len()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::Connection("memory store unavailable".into()));
        }
        Ok(())
    }
}

fn duplicate(table: &str, key: &str) -> Error {
    Error::Database(format!("UNIQUE constraint failed: {table}.{key}"))
}

impl AccountStore for MemoryStore {
    async fn insert_account(&self, account: &Account) -> Result<()> {
        self.check()?;
        let mut accounts = self.accounts.write();
        if accounts.iter().any(|a| a.id == account.id) {
            return Err(duplicate("account", "account_id"));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn find_account_by_name(&self, name: &str) -> Result<Option<Account>> {
        self.check()?;
        Ok(self
            .accounts
            .read()
            .iter()
            .find(|a| a.name == name)
            .cloned())
    }
}

impl DealerStore for MemoryStore {
    async fn insert_dealer(&self, dealer: &Dealer) -> Result<()> {
        self.check()?;
        let mut dealers = self.dealers.write();
        if dealers.iter().any(|d| d.id == dealer.id) {
            return Err(duplicate("dealer", "dealer_id"));
        }
        dealers.push(dealer.clone());
        Ok(())
    }

    async fn find_dealer(&self, identity: &DealerIdentity) -> Result<Option<Dealer>> {
        self.check()?;
        Ok(self
            .dealers
            .read()
            .iter()
            .find(|d| identity.matches(d))
            .cloned())
    }
}

impl OpportunityStore for MemoryStore {
    async fn insert_opportunity(&self, opportunity: &Opportunity) -> Result<()> {
        self.check()?;
        let mut opportunities = self.opportunities.write();
        if opportunities.iter().any(|o| o.id == opportunity.id) {
            return Err(duplicate("opportunity", "opportunity_id"));
        }
        opportunities.push(opportunity.clone());
        Ok(())
    }

    async fn list_by_dealer_code(&self, dealer_code: &str) -> Result<Vec<Opportunity>> {
        self.check()?;
        Ok(self
            .opportunities
            .read()
            .iter()
            .filter(|o| o.dealer_code == dealer_code)
            .cloned()
            .collect())
    }

    async fn find_for_dealer(
        &self,
        id: &OpportunityId,
        dealer_id: &DealerId,
    ) -> Result<Option<Opportunity>> {
        self.check()?;
        Ok(self
            .opportunities
            .read()
            .iter()
            .find(|o| &o.id == id && &o.dealer_id == dealer_id)
            .cloned())
    }
}

impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        self.check()
    }
}
