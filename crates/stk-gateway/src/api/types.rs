//! API request and response types.

use crate::confirm::TransactionStatus;
use serde::{Deserialize, Serialize};

/// Request to charge a mobile-money subscriber.
#[derive(Debug, Deserialize)]
pub struct ChargeRequest {
    /// Raw, untrusted phone number as entered by the user.
    #[serde(default)]
    pub phone_number: String,

    /// Charge amount; a JSON number or numeric string. Kept untyped
    /// so malformed amounts are rejected with our own message rather
    /// than a deserialization failure.
    #[serde(default)]
    pub amount: serde_json::Value,

    /// Optional merchant reference; synthesized when absent.
    pub external_reference: Option<String>,

    /// Optional customer name shown on the payment prompt.
    pub customer_name: Option<String>,
}

/// Response after a charge attempt resolves or times out.
#[derive(Debug, Serialize)]
pub struct ChargeResponse {
    pub success: bool,
    /// True only when the provider reported a terminal status within
    /// the polling window; false means unresolved, not failed.
    pub verified: bool,
    pub message: String,
    pub data: ChargeData,
}

#[derive(Debug, Serialize)]
pub struct ChargeData {
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    pub details: Option<serde_json::Value>,
}

/// Transaction status passthrough response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub data: serde_json::Value,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<serde_json::Value>,
}

/// Service wallet balance passthrough response.
#[derive(Debug, Serialize)]
pub struct WalletBalanceResponse {
    pub success: bool,
    pub data: serde_json::Value,
}
