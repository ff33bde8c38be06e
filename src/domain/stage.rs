//! Sales pipeline stages derived from a deal's closing probability.
//!
//! The mapping is a fixed table of inclusive probability ranges. Values that
//! fall outside every range (including 1..=9 and 96..=99) classify as
//! [`Stage::Unknown`].
//!
//! # Examples
//!
//! ```
//! use dealerdesk::domain::stage::Stage;
//!
//! assert_eq!(Stage::from_probability(65), Stage::ValueProposition);
//! assert_eq!(Stage::from_probability(97).as_str(), "Unknown Stage");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A named phase in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Prospecting,
    Qualification,
    NeedsAnalysis,
    ValueProposition,
    DecisionMakers,
    PerceptionAnalysis,
    ProposalPriceQuote,
    NegotiationReview,
    ClosedWon,
    ClosedLost,
    Unknown,
}

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Stage; 11] = [
        Stage::Prospecting,
        Stage::Qualification,
        Stage::NeedsAnalysis,
        Stage::ValueProposition,
        Stage::DecisionMakers,
        Stage::PerceptionAnalysis,
        Stage::ProposalPriceQuote,
        Stage::NegotiationReview,
        Stage::ClosedWon,
        Stage::ClosedLost,
        Stage::Unknown,
    ];

    /// Classify a probability percentage into its pipeline stage.
    ///
    /// Total over all integers; never fails.
    #[must_use]
    pub const fn from_probability(probability: i64) -> Self {
        match probability {
            10..=20 => Self::Prospecting,
            21..=40 => Self::Qualification,
            41..=60 => Self::NeedsAnalysis,
            61..=70 => Self::ValueProposition,
            71..=80 => Self::DecisionMakers,
            81..=85 => Self::PerceptionAnalysis,
            86..=90 => Self::ProposalPriceQuote,
            91..=95 => Self::NegotiationReview,
            100 => Self::ClosedWon,
            0 => Self::ClosedLost,
            _ => Self::Unknown,
        }
    }

    /// The display label stored alongside an opportunity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prospecting => "Prospecting",
            Self::Qualification => "Qualification",
            Self::NeedsAnalysis => "Needs Analysis",
            Self::ValueProposition => "Value Proposition",
            Self::DecisionMakers => "Decision Makers",
            Self::PerceptionAnalysis => "Perception Analysis",
            Self::ProposalPriceQuote => "Proposal/Price Quote",
            Self::NegotiationReview => "Negotiation/Review",
            Self::ClosedWon => "Closed Won",
            Self::ClosedLost => "Closed Lost",
            Self::Unknown => "Unknown Stage",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| Error::Parse(format!("unknown stage label '{s}'")))
    }
}

impl Serialize for Stage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Stage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
