//! Dealers and the identity triple callers present to act as one.

use serde::{Deserialize, Serialize};

use super::id::DealerId;

/// A dealer that owns opportunities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    pub id: DealerId,
    pub code: String,
    /// Name of the person who owns this dealer's opportunities.
    pub owner: String,
}

impl Dealer {
    /// Create a dealer with a freshly generated identifier.
    pub fn new(code: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: DealerId::generate(),
            code: code.into(),
            owner: owner.into(),
        }
    }

    /// The identity triple that authenticates as this dealer.
    #[must_use]
    pub fn identity(&self) -> DealerIdentity {
        DealerIdentity {
            id: self.id.clone(),
            code: self.code.clone(),
            owner: self.owner.clone(),
        }
    }
}

/// Caller-supplied dealer identity.
///
/// A request is accepted on behalf of a dealer only when all three fields
/// match the same stored dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerIdentity {
    pub id: DealerId,
    pub code: String,
    pub owner: String,
}

impl DealerIdentity {
    pub fn new(id: impl Into<DealerId>, code: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            owner: owner.into(),
        }
    }

    /// True when every field matches `dealer`.
    #[must_use]
    pub fn matches(&self, dealer: &Dealer) -> bool {
        self.id == dealer.id && self.code == dealer.code && self.owner == dealer.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matches_its_dealer() {
        let dealer = Dealer::new("C1", "Alice");
        assert!(dealer.identity().matches(&dealer));
    }

    #[test]
    fn any_wrong_field_fails_to_match() {
        let dealer = Dealer::new("C1", "Alice");

        let wrong_id = DealerIdentity::new("other", "C1", "Alice");
        let wrong_code = DealerIdentity::new(dealer.id.clone(), "C2", "Alice");
        let wrong_owner = DealerIdentity::new(dealer.id.clone(), "C1", "Bob");

        assert!(!wrong_id.matches(&dealer));
        assert!(!wrong_code.matches(&dealer));
        assert!(!wrong_owner.matches(&dealer));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let dealer = Dealer::new("C1", "Alice");
        let identity = DealerIdentity::new(dealer.id.clone(), "c1", "alice");
        assert!(!identity.matches(&dealer));
    }
}
