//! PayHero REST API client for STK push payment operations.

use crate::error::PayHeroError;
use crate::types::{StkPushRequest, StkPushResponse};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// PayHero REST API client.
#[derive(Clone)]
pub struct PayHeroClient {
    client: Client,
    base_url: String,
}

impl PayHeroClient {
    /// Create a new PayHero client.
    ///
    /// `auth_token` is sent as-is in the `Authorization` header on
    /// every request (PayHero issues Basic credentials).
    pub fn new(base_url: impl Into<String>, auth_token: &str) -> Result<Self, PayHeroError> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(auth_token)
            .map_err(|e| PayHeroError::Client(format!("Invalid auth token: {}", e)))?;
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .map_err(|e| PayHeroError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Submit an STK push charge to the subscriber's phone.
    #[instrument(skip(self, request))]
    pub async fn stk_push(&self, request: &StkPushRequest) -> Result<StkPushResponse, PayHeroError> {
        let url = format!("{}/payments", self.base_url);
        debug!(url = %url, phone_number = %request.phone_number, amount = request.amount, "Submitting STK push");

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, body = %body, "STK push rejected");
            return Err(PayHeroError::Api { status, body });
        }

        let parsed: StkPushResponse = response.json().await?;
        debug!(reference = ?parsed.reference, status = ?parsed.status, "STK push accepted");
        Ok(parsed)
    }

    /// Query the status of a charge attempt by its provider reference.
    ///
    /// Returns the raw vendor payload; callers classify the free-text
    /// status field themselves.
    #[instrument(skip(self))]
    pub async fn transaction_status(&self, reference: &str) -> Result<serde_json::Value, PayHeroError> {
        let url = format!("{}/transaction-status", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("reference", reference)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, body = %body, reference = %reference, "Transaction status query failed");
            return Err(PayHeroError::Api { status, body });
        }

        Ok(response.json().await?)
    }

    /// Fetch the service wallet balance.
    ///
    /// Used by the gateway's health probe as a cheap reachability and
    /// authentication check.
    #[instrument(skip(self))]
    pub async fn service_wallet_balance(&self) -> Result<serde_json::Value, PayHeroError> {
        let url = format!("{}/wallets", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("wallet_type", "service_wallet")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, body = %body, "Wallet balance query failed");
            return Err(PayHeroError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}
