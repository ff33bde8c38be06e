//! HTTP surface.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | POST | `/new_customer` | create an opportunity |
//! | GET | `/get_customers` | list a dealer's opportunities |
//! | GET | `/single-customer` | fetch one opportunity |
//! | GET | `/health` | store round-trip |

pub mod dto;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::build_router;
pub use server::serve;
