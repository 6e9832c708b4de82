//! Provider seam for payment operations.
//!
//! The poller and handlers talk to the provider through this trait so
//! tests can substitute a fake without any network.

use async_trait::async_trait;
use payhero_client::{PayHeroClient, PayHeroError, StkPushRequest, StkPushResponse};

/// Operations the gateway needs from the payment provider.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Submit a charge and obtain the provider's response.
    async fn initiate_charge(
        &self,
        request: &StkPushRequest,
    ) -> Result<StkPushResponse, PayHeroError>;

    /// Query the status of a charge attempt by reference.
    async fn query_status(&self, reference: &str) -> Result<serde_json::Value, PayHeroError>;

    /// Fetch the service wallet balance.
    async fn wallet_balance(&self) -> Result<serde_json::Value, PayHeroError>;
}

#[async_trait]
impl PaymentProvider for PayHeroClient {
    async fn initiate_charge(
        &self,
        request: &StkPushRequest,
    ) -> Result<StkPushResponse, PayHeroError> {
        self.stk_push(request).await
    }

    async fn query_status(&self, reference: &str) -> Result<serde_json::Value, PayHeroError> {
        self.transaction_status(reference).await
    }

    async fn wallet_balance(&self) -> Result<serde_json::Value, PayHeroError> {
        self.service_wallet_balance().await
    }
}
