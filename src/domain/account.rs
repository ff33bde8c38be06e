//! Customer accounts.

use serde::{Deserialize, Serialize};

use super::id::AccountId;

/// A customer organisation that opportunities are sold to.
///
/// Accounts are provisioned out-of-band and never modified by the HTTP
/// surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
}

impl Account {
    /// Create an account with a freshly generated identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AccountId::generate(),
            name: name.into(),
        }
    }
}
