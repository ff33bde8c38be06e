//! SQLite database modules.
//!
//! Provides connection pooling, schema definitions, and Diesel row types.

pub mod connection;
pub mod model;
pub mod schema;
