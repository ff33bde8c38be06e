//! Dealerdesk - dealer-scoped sales opportunity tracking.
//!
//! Dealers record sales opportunities against customer accounts and read back
//! the opportunities visible to them. Every request carries the dealer's
//! identity triple (id, code, owner), which is checked against the dealer
//! registry before anything is read or written.
//!
//! # Architecture
//!
//! - **`domain`** - Accounts, dealers, opportunities and the stage classifier
//! - **`port`** - Store traits the application depends on
//! - **`application`** - [`application::OpportunityService`] with the
//!   lookup-then-act rules
//! - **`adapter::inbound`** - HTTP (axum) and CLI (clap) surfaces
//! - **`adapter::outbound`** - SQLite (Diesel) and in-memory stores
//! - **`infrastructure`** - Configuration and logging
//!
//! # Example
//!
//! ```no_run
//! use dealerdesk::domain::Stage;
//!
//! assert_eq!(Stage::from_probability(65), Stage::ValueProposition);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
