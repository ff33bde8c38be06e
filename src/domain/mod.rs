//! Domain types: accounts, dealers, opportunities and pipeline stages.

pub mod account;
pub mod dealer;
pub mod id;
pub mod opportunity;
pub mod stage;

pub use account::Account;
pub use dealer::{Dealer, DealerIdentity};
pub use id::{AccountId, DealerId, OpportunityId};
pub use opportunity::{Opportunity, OpportunityDraft, OpportunitySummary};
pub use stage::Stage;
