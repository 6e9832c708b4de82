//! PayHero REST API client.

mod client;
mod error;
mod types;

pub use client::PayHeroClient;
pub use error::PayHeroError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> PayHeroClient {
        PayHeroClient::new(mock_server.uri(), "Basic dGVzdDp0ZXN0").unwrap()
    }

    fn charge_request() -> StkPushRequest {
        StkPushRequest {
            amount: 100.0,
            phone_number: "254712345678".into(),
            channel_id: "852".into(),
            provider: "m-pesa".into(),
            external_reference: "INV-001".into(),
            customer_name: "John Doe".into(),
            callback_url: None,
        }
    }

    #[tokio::test]
    async fn test_stk_push_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payments"))
            .and(header("Authorization", "Basic dGVzdDp0ZXN0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "status": "QUEUED",
                "reference": "REF-123",
                "CheckoutRequestID": "ws_CO_123"
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.stk_push(&charge_request()).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.usable_reference(), Some("REF-123"));
        assert_eq!(response.checkout_request_id.as_deref(), Some("ws_CO_123"));
    }

    #[tokio::test]
    async fn test_stk_push_missing_reference() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "status": "QUEUED"
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let response = client.stk_push(&charge_request()).await.unwrap();

        assert!(response.usable_reference().is_none());
    }

    #[tokio::test]
    async fn test_stk_push_empty_reference_unusable() {
        let response = StkPushResponse {
            success: Some(true),
            status: Some("QUEUED".into()),
            reference: Some("   ".into()),
            checkout_request_id: None,
        };
        assert!(response.usable_reference().is_none());
    }

    #[tokio::test]
    async fn test_stk_push_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(400).set_body_string("insufficient channel funds"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.stk_push(&charge_request()).await;

        assert!(matches!(
            result,
            Err(PayHeroError::Api { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn test_transaction_status_passthrough() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "status": "SUCCESS",
            "provider_reference": "SBC8XOQLPP",
            "amount": 100
        });

        Mock::given(method("GET"))
            .and(path("/transaction-status"))
            .and(query_param("reference", "REF-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.transaction_status("REF-123").await.unwrap();

        assert_eq!(result["status"], "SUCCESS");
        assert_eq!(result["provider_reference"], "SBC8XOQLPP");
    }

    #[tokio::test]
    async fn test_transaction_status_provider_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transaction-status"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.transaction_status("REF-123").await;

        assert!(matches!(
            result,
            Err(PayHeroError::Api { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_service_wallet_balance() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/wallets"))
            .and(query_param("wallet_type", "service_wallet"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "available_balance": 2500.75,
                "currency": "KES"
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.service_wallet_balance().await.unwrap();

        assert_eq!(result["available_balance"], 2500.75);
    }

    #[test]
    fn test_invalid_auth_token_rejected() {
        let result = PayHeroClient::new("http://localhost", "bad\ntoken");
        assert!(matches!(result, Err(PayHeroError::Client(_))));
    }
}
