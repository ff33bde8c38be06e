//! Application services (use cases).

pub mod opportunity;

pub use opportunity::OpportunityService;
