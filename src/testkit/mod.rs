//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for drafts and request payloads.
//! - [`store`] - Seeded services and schema setup for SQLite pools.

pub mod domain;
pub mod store;
