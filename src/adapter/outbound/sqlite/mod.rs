//! SQLite persistence adapter.
//!
//! Provides the Diesel-backed implementation of the store ports.

pub mod database;
pub mod store;

pub use database::connection::{create_pool, DbPool, PoolOptions};
pub use store::SqliteStore;
