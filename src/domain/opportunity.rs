//! Sales opportunities.
//!
//! An [`Opportunity`] is created once from an [`OpportunityDraft`] after its
//! account and dealer have been resolved, and is never modified afterwards.
//! Its [`Stage`] is always derived from the draft's probability.

use chrono::{NaiveDate, NaiveDateTime, SubsecRound};
use rust_decimal::Decimal;

use super::account::Account;
use super::dealer::Dealer;
use super::id::{AccountId, DealerId, OpportunityId};
use super::stage::Stage;

/// Caller-supplied fields of a new opportunity.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityDraft {
    pub name: String,
    pub close_date: NaiveDate,
    pub amount: Decimal,
    pub description: Option<String>,
    pub probability: i64,
    pub next_step: Option<String>,
}

/// A persisted sales opportunity.
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub name: String,
    pub account_id: AccountId,
    pub close_date: NaiveDate,
    pub amount: Decimal,
    pub description: Option<String>,
    pub dealer_id: DealerId,
    /// Dealer code copied from the dealer at creation time.
    pub dealer_code: String,
    /// Dealer owner copied from the dealer at creation time.
    pub owner: String,
    pub stage: Stage,
    pub probability: i64,
    pub next_step: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Opportunity {
    /// Open a new opportunity for a resolved account and dealer.
    ///
    /// Assigns a fresh identifier and classifies the stage from the draft's
    /// probability. The creation timestamp is kept to microsecond precision.
    #[must_use]
    pub fn open(
        draft: OpportunityDraft,
        account: &Account,
        dealer: &Dealer,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: OpportunityId::generate(),
            name: draft.name,
            account_id: account.id.clone(),
            close_date: draft.close_date,
            amount: draft.amount,
            description: draft.description,
            dealer_id: dealer.id.clone(),
            dealer_code: dealer.code.clone(),
            owner: dealer.owner.clone(),
            stage: Stage::from_probability(draft.probability),
            probability: draft.probability,
            next_step: draft.next_step,
            created_at: created_at.trunc_subsecs(6),
        }
    }

    /// Project to the listing view.
    #[must_use]
    pub fn summary(&self) -> OpportunitySummary {
        OpportunitySummary {
            name: self.name.clone(),
            account_id: self.account_id.clone(),
            close_date: self.close_date,
            amount: self.amount,
            description: self.description.clone(),
            stage: self.stage,
        }
    }
}

/// Listing projection of an opportunity.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunitySummary {
    pub name: String,
    pub account_id: AccountId,
    pub close_date: NaiveDate,
    pub amount: Decimal,
    pub description: Option<String>,
    pub stage: Stage,
}
