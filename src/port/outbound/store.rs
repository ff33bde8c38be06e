//! Persistence ports for accounts, dealers and opportunities.

use std::future::Future;

use crate::domain::{Account, Dealer, DealerId, DealerIdentity, Opportunity, OpportunityId};
use crate::error::Result;

/// Storage operations for accounts.
pub trait AccountStore: Send + Sync {
    /// Insert a new account.
    fn insert_account(&self, account: &Account) -> impl Future<Output = Result<()>> + Send;

    /// Find the first account with exactly this name.
    fn find_account_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Account>>> + Send;
}

/// Storage operations for dealers.
pub trait DealerStore: Send + Sync {
    /// Insert a new dealer.
    fn insert_dealer(&self, dealer: &Dealer) -> impl Future<Output = Result<()>> + Send;

    /// Find the dealer matching every field of `identity`.
    fn find_dealer(
        &self,
        identity: &DealerIdentity,
    ) -> impl Future<Output = Result<Option<Dealer>>> + Send;
}

/// Storage operations for opportunities. Append-only.
pub trait OpportunityStore: Send + Sync {
    /// Insert a new opportunity as a single atomic write.
    fn insert_opportunity(
        &self,
        opportunity: &Opportunity,
    ) -> impl Future<Output = Result<()>> + Send;

    /// All opportunities carrying this dealer code, in store order.
    fn list_by_dealer_code(
        &self,
        dealer_code: &str,
    ) -> impl Future<Output = Result<Vec<Opportunity>>> + Send;

    /// The opportunity with this id, if it belongs to `dealer_id`.
    fn find_for_dealer(
        &self,
        id: &OpportunityId,
        dealer_id: &DealerId,
    ) -> impl Future<Output = Result<Option<Opportunity>>> + Send;
}

/// A complete backing store.
pub trait Store: AccountStore + DealerStore + OpportunityStore + 'static {
    /// Cheap round-trip used by health checks.
    fn ping(&self) -> impl Future<Output = Result<()>> + Send;
}
