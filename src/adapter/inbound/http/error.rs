//! HTTP error responses.
//!
//! Every failure is rendered as `{"error": "<message>"}`. The status code
//! and message for a missing dealer differ per endpoint, so service errors
//! are converted through the endpoint-specific constructors below.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{Error, ServiceError};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An error ready to be returned from a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub const INTERNAL: &'static str = "internal server error";

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Malformed request body or query string.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Rejected `POST` body.
    ///
    /// Oversized bodies keep their 413 status; anything else that fails to
    /// decode is a plain bad request.
    #[must_use]
    pub fn from_json_rejection(rejection: &JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(status, rejection.body_text())
    }

    /// Store failure. The cause is logged and never leaked to the client.
    #[must_use]
    pub fn internal(cause: &Error) -> Self {
        error!(error = %cause, "store operation failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, Self::INTERNAL)
    }

    /// Map a failure of `POST /new_customer`.
    #[must_use]
    pub fn from_create(err: ServiceError) -> Self {
        match err {
            ServiceError::AccountNotFound { .. } => Self::bad_request("Account does not exist"),
            ServiceError::DealerNotFound { .. } => Self::bad_request("Dealer does not exist"),
            other => Self::from_service(other),
        }
    }

    /// Map a failure of `GET /get_customers`.
    #[must_use]
    pub fn from_list(err: ServiceError) -> Self {
        match err {
            ServiceError::DealerNotFound { .. } => {
                Self::new(StatusCode::UNAUTHORIZED, "Dealer does not exist")
            }
            other => Self::from_service(other),
        }
    }

    /// Map a failure of `GET /single-customer`.
    #[must_use]
    pub fn from_fetch(err: ServiceError) -> Self {
        match err {
            ServiceError::DealerNotFound { .. } => {
                Self::new(StatusCode::UNAUTHORIZED, "Dealer doesn't exist")
            }
            ServiceError::OpportunityNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "Opportunity not found")
            }
            other => Self::from_service(other),
        }
    }

    fn from_service(err: ServiceError) -> Self {
        match err {
            ServiceError::Store(cause) => Self::internal(&cause),
            other => {
                error!(error = %other, "unmapped service error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, Self::INTERNAL)
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DealerId, OpportunityId};

    fn dealer_missing() -> ServiceError {
        ServiceError::DealerNotFound {
            dealer_id: DealerId::from("D1"),
        }
    }

    fn store_down() -> ServiceError {
        ServiceError::Store(Error::Connection("pool timed out".into()))
    }

    #[test]
    fn create_maps_lookups_to_bad_request() {
        let err = ApiError::from_create(ServiceError::AccountNotFound {
            name: "Acme".into(),
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Account does not exist");

        let err = ApiError::from_create(dealer_missing());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Dealer does not exist");
    }

    #[test]
    fn list_maps_dealer_to_unauthorized() {
        let err = ApiError::from_list(dealer_missing());
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Dealer does not exist");
    }

    #[test]
    fn fetch_uses_its_own_messages() {
        let err = ApiError::from_fetch(dealer_missing());
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Dealer doesn't exist");

        let err = ApiError::from_fetch(ServiceError::OpportunityNotFound {
            id: OpportunityId::from("O1"),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Opportunity not found");
    }

    #[test]
    fn store_failures_hide_their_cause() {
        for err in [
            ApiError::from_create(store_down()),
            ApiError::from_list(store_down()),
            ApiError::from_fetch(store_down()),
        ] {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.message(), ApiError::INTERNAL);
        }
    }

    #[test]
    fn response_carries_status() {
        let response = ApiError::bad_request("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
