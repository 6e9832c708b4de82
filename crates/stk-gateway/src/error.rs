//! Error types for the payment gateway.
//!
//! Only irrecoverable, pre-polling failures map to HTTP error
//! statuses. Anything observed after a charge reference exists is a
//! business outcome, returned as a 200-level response elsewhere.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Gateway error types.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidPhone(String),

    #[error("{0}")]
    InvalidAmount(String),

    #[error("Transaction reference is required")]
    MissingReference,

    #[error("Charge submission failed: {0}")]
    Submission(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidPhone(_)
            | GatewayError::InvalidAmount(_)
            | GatewayError::MissingReference => StatusCode::BAD_REQUEST,
            GatewayError::Submission(_) | GatewayError::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<crate::confirm::ConfirmError> for GatewayError {
    fn from(e: crate::confirm::ConfirmError) -> Self {
        GatewayError::Submission(e.to_string())
    }
}

impl From<payhero_client::PayHeroError> for GatewayError {
    fn from(e: payhero_client::PayHeroError) -> Self {
        GatewayError::Provider(e.to_string())
    }
}
