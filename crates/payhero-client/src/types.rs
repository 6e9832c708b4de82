//! PayHero API types.

use serde::{Deserialize, Serialize};

/// STK push charge request payload.
#[derive(Debug, Clone, Serialize)]
pub struct StkPushRequest {
    /// Charge amount in KES.
    pub amount: f64,
    /// Subscriber phone number in 254XXXXXXXXX format.
    pub phone_number: String,
    /// Merchant channel/account identifier receiving the funds.
    pub channel_id: String,
    /// Payment provider identifier (e.g. "m-pesa").
    pub provider: String,
    /// Merchant-side reference for this charge attempt.
    pub external_reference: String,
    /// Name shown on the subscriber's payment prompt.
    pub customer_name: String,
    /// Optional callback URL for out-of-band result delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// STK push charge response.
///
/// All fields are optional: the vendor's response shape is not under
/// our control, and a missing reference must be detectable rather
/// than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct StkPushResponse {
    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub status: Option<String>,

    /// Provider-issued reference identifying this charge attempt.
    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default, rename = "CheckoutRequestID")]
    pub checkout_request_id: Option<String>,
}

impl StkPushResponse {
    /// The reference, if present and non-empty.
    ///
    /// The reference is the only handle for later status queries, so
    /// an empty string is as unusable as an absent field.
    pub fn usable_reference(&self) -> Option<&str> {
        self.reference.as_deref().filter(|r| !r.trim().is_empty())
    }
}
