//! Route table.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handler;
use crate::application::OpportunityService;
use crate::port::outbound::store::Store;

/// Build the application router over `service`.
///
/// Request bodies larger than `max_payload_bytes` are rejected before they
/// reach a handler.
pub fn build_router<S: Store>(service: OpportunityService<S>, max_payload_bytes: usize) -> Router {
    Router::new()
        .route("/new_customer", post(handler::create_opportunity::<S>))
        .route("/get_customers", get(handler::list_opportunities::<S>))
        .route("/single-customer", get(handler::get_opportunity::<S>))
        .route("/health", get(handler::health::<S>))
        .layer(DefaultBodyLimit::max(max_payload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
