//! Opportunity use cases.
//!
//! [`OpportunityService`] owns the lookup-then-act rules shared by the HTTP
//! and CLI surfaces: every operation on behalf of a dealer first confirms
//! the caller's identity triple against the store.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{
    Account, Dealer, DealerIdentity, Opportunity, OpportunityDraft, OpportunityId,
    OpportunitySummary,
};
use crate::error::ServiceError;
use crate::port::outbound::store::Store;

type Result<T> = std::result::Result<T, ServiceError>;

/// Business operations over a [`Store`].
pub struct OpportunityService<S> {
    store: Arc<S>,
}

impl<S> Clone for OpportunityService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> OpportunityService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Borrow the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create an opportunity for an existing account and dealer.
    ///
    /// The account is resolved by name and the dealer by its full identity
    /// triple. Nothing is written unless both exist.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::AccountNotFound`] when no account has `account_name`
    /// - [`ServiceError::DealerNotFound`] when the triple matches no dealer
    /// - [`ServiceError::Store`] when the store fails
    pub async fn create(
        &self,
        account_name: &str,
        identity: &DealerIdentity,
        draft: OpportunityDraft,
    ) -> Result<Opportunity> {
        debug!(account = account_name, dealer_id = %identity.id, "creating opportunity");

        let account = self
            .store
            .find_account_by_name(account_name)
            .await?
            .ok_or_else(|| {
                warn!(account = account_name, "account does not exist");
                ServiceError::AccountNotFound {
                    name: account_name.to_owned(),
                }
            })?;

        let dealer = self.authenticate(identity).await?;

        let opportunity = Opportunity::open(draft, &account, &dealer, Utc::now().naive_utc());
        self.store.insert_opportunity(&opportunity).await?;

        info!(
            opportunity_id = %opportunity.id,
            dealer_id = %dealer.id,
            stage = %opportunity.stage,
            "opportunity created"
        );
        Ok(opportunity)
    }

    /// List opportunities visible to a dealer.
    ///
    /// After the identity check, records are selected by dealer code alone,
    /// so dealers sharing a code see each other's opportunities.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::DealerNotFound`] when the triple matches no dealer
    /// - [`ServiceError::Store`] when the store fails
    pub async fn list_for_dealer(
        &self,
        identity: &DealerIdentity,
    ) -> Result<Vec<OpportunitySummary>> {
        self.authenticate(identity).await?;

        let opportunities = self.store.list_by_dealer_code(&identity.code).await?;
        debug!(
            dealer_code = %identity.code,
            count = opportunities.len(),
            "listed opportunities"
        );
        Ok(opportunities.iter().map(Opportunity::summary).collect())
    }

    /// Fetch one opportunity owned by the calling dealer.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::DealerNotFound`] when the triple matches no dealer
    /// - [`ServiceError::OpportunityNotFound`] when `id` does not exist or
    ///   belongs to a different dealer id
    /// - [`ServiceError::Store`] when the store fails
    pub async fn fetch(
        &self,
        identity: &DealerIdentity,
        id: &OpportunityId,
    ) -> Result<Opportunity> {
        self.authenticate(identity).await?;

        self.store
            .find_for_dealer(id, &identity.id)
            .await?
            .ok_or_else(|| {
                warn!(opportunity_id = %id, dealer_id = %identity.id, "opportunity not found");
                ServiceError::OpportunityNotFound { id: id.clone() }
            })
    }

    /// Register a new account out-of-band.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] when the insert fails.
    pub async fn provision_account(&self, name: &str) -> Result<Account> {
        let account = Account::new(name);
        self.store.insert_account(&account).await?;
        info!(account_id = %account.id, account_name = name, "account provisioned");
        Ok(account)
    }

    /// Register a new dealer out-of-band.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] when the insert fails.
    pub async fn provision_dealer(&self, code: &str, owner: &str) -> Result<Dealer> {
        let dealer = Dealer::new(code, owner);
        self.store.insert_dealer(&dealer).await?;
        info!(dealer_id = %dealer.id, dealer_code = code, owner, "dealer provisioned");
        Ok(dealer)
    }

    async fn authenticate(&self, identity: &DealerIdentity) -> Result<Dealer> {
        self.store.find_dealer(identity).await?.ok_or_else(|| {
            warn!(
                dealer_id = %identity.id,
                dealer_code = %identity.code,
                "dealer does not exist"
            );
            ServiceError::DealerNotFound {
                dealer_id: identity.id.clone(),
            }
        })
    }
}
