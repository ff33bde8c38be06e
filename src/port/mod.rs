//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   HTTP / CLI ──► OpportunityService ──► Store port ──► SQLite | memory
//! ```
//!
//! - [`outbound::store`] - Persistence for accounts, dealers and opportunities

pub mod outbound;
