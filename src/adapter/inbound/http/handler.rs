//! Request handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, warn};

use super::dto::{
    CreateOpportunityRequest, CreateOpportunityResponse, DealerQuery, OpportunitySummaryView,
    OpportunityView, SingleOpportunityQuery,
};
use super::error::ApiError;
use crate::application::OpportunityService;
use crate::port::outbound::store::Store;

/// `POST /new_customer`
pub async fn create_opportunity<S: Store>(
    State(service): State<OpportunityService<S>>,
    payload: Result<Json<CreateOpportunityRequest>, JsonRejection>,
) -> Result<Json<CreateOpportunityResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "rejected create payload");
        ApiError::from_json_rejection(&rejection)
    })?;

    let (account_name, identity, draft) = request.into_parts();
    let opportunity = service
        .create(&account_name, &identity, draft)
        .await
        .map_err(ApiError::from_create)?;

    Ok(Json(CreateOpportunityResponse::created(opportunity.id)))
}

/// `GET /get_customers`
pub async fn list_opportunities<S: Store>(
    State(service): State<OpportunityService<S>>,
    query: Result<Query<DealerQuery>, QueryRejection>,
) -> Result<Json<Vec<OpportunitySummaryView>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let summaries = service
        .list_for_dealer(&query.identity())
        .await
        .map_err(ApiError::from_list)?;

    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}

/// `GET /single-customer`
pub async fn get_opportunity<S: Store>(
    State(service): State<OpportunityService<S>>,
    query: Result<Query<SingleOpportunityQuery>, QueryRejection>,
) -> Result<Json<OpportunityView>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let opportunity = service
        .fetch(&query.identity(), &query.opportunity_id())
        .await
        .map_err(ApiError::from_fetch)?;

    Ok(Json(opportunity.into()))
}

/// `GET /health`
pub async fn health<S: Store>(State(service): State<OpportunityService<S>>) -> Response {
    match service.store().ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
        Err(e) => {
            warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
                .into_response()
        }
    }
}
