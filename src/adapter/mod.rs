//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: HTTP and CLI
//! - [`outbound`] - Driven side: store implementations

pub mod inbound;
pub mod outbound;
