//! HTTP request handlers.

use super::types::{
    ChargeData, ChargeRequest, ChargeResponse, HealthResponse, StatusResponse,
    WalletBalanceResponse,
};
use super::AppState;
use crate::confirm::{charge_and_confirm, ChargeParams, PollStatus, TransactionStatus};
use crate::error::GatewayError;
use crate::phone::{normalize_phone, parse_amount};
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, warn};

/// Charge a subscriber and wait for the transaction to resolve.
///
/// Validation failures are 400s and submission failures 500s; once a
/// reference exists, every outcome (including timeout) is a 200-level
/// business result because the charge may still resolve out-of-band.
pub async fn charge(
    State(state): State<AppState>,
    Json(request): Json<ChargeRequest>,
) -> Result<Json<ChargeResponse>, GatewayError> {
    let phone_number = normalize_phone(&request.phone_number).map_err(GatewayError::InvalidPhone)?;
    let amount = parse_amount(&request.amount).map_err(GatewayError::InvalidAmount)?;

    info!(phone_number = %phone_number, amount, "Charge request received");

    let outcome = charge_and_confirm(
        state.provider.as_ref(),
        &state.confirm,
        ChargeParams {
            phone_number,
            amount,
            external_reference: request.external_reference,
            customer_name: request.customer_name,
        },
    )
    .await?;

    let (success, verified, message, status) = match outcome.status {
        PollStatus::Resolved(TransactionStatus::Completed) => (
            true,
            true,
            "Payment completed successfully.".to_string(),
            Some(TransactionStatus::Completed),
        ),
        PollStatus::Resolved(status) => {
            (false, true, format!("Payment {}.", status), Some(status))
        }
        PollStatus::TimedOut => (
            false,
            false,
            "Payment not confirmed within the polling window. It may still complete.".to_string(),
            None,
        ),
    };

    info!(reference = %outcome.reference, success, verified, "Charge request resolved");

    Ok(Json(ChargeResponse {
        success,
        verified,
        message,
        data: ChargeData {
            reference: outcome.reference,
            status,
            details: outcome.details,
        },
    }))
}

/// Pass through the provider's status payload for a reference.
pub async fn transaction_status(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<StatusResponse>, GatewayError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(GatewayError::MissingReference);
    }

    let data = state.provider.query_status(reference).await?;

    Ok(Json(StatusResponse {
        success: true,
        data,
    }))
}

/// Status route hit without a reference segment.
pub async fn transaction_status_missing() -> GatewayError {
    GatewayError::MissingReference
}

/// Health check endpoint.
///
/// Probes provider reachability via the service wallet balance. Never
/// fails hard: a provider error is reported in the body with a 200.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.provider.wallet_balance().await {
        Ok(balance) => Json(HealthResponse {
            success: true,
            message: "Gateway healthy, provider reachable.".to_string(),
            timestamp,
            balance: Some(balance),
        }),
        Err(e) => {
            warn!(error = %e, "Health probe could not reach provider");
            Json(HealthResponse {
                success: false,
                message: format!("Provider unreachable: {}", e),
                timestamp,
                balance: None,
            })
        }
    }
}

/// Service wallet balance passthrough.
pub async fn wallet_balance(
    State(state): State<AppState>,
) -> Result<Json<WalletBalanceResponse>, GatewayError> {
    let data = state.provider.wallet_balance().await?;

    Ok(Json(WalletBalanceResponse {
        success: true,
        data,
    }))
}
