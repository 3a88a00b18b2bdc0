use crate::{
    config::Config,
    error::RelayError,
    models::{PaymentIntent, PaymentRequest},
};
use reqwest::header::ACCEPT;
use serde::Deserialize;

/// The two shapes the gateway answers with, decoded right after the body
/// parse so callers only ever see a typed result.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum GatewayResponse {
    Failure { error: GatewayError },
    Intent(PaymentIntent),
}

#[derive(Deserialize, Debug)]
struct GatewayError {
    message: Option<String>,
}

#[derive(Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.gateway_url.clone(), config.secret_key.clone())
    }

    /// One attempt against the gateway; no retry, no timeout beyond the
    /// client default.
    pub async fn create_payment_intent(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentIntent, RelayError> {
        let response = self
            .client
            .post(format!("{}/payments", self.base_url))
            .header(ACCEPT, "application/json")
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to reach payment gateway");
                RelayError::Transport(e)
            })?;

        let reply = response.json::<GatewayResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "failed to decode gateway response");
            RelayError::Transport(e)
        })?;

        match reply {
            GatewayResponse::Failure { error } => {
                let message = error
                    .message
                    .unwrap_or_else(|| "Something went wrong.".to_string());
                tracing::error!(message = %message, "gateway rejected payment");
                Err(RelayError::UpstreamPayment(message))
            }
            GatewayResponse::Intent(intent) => Ok(intent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_request() -> PaymentRequest {
        PaymentRequest::demo(None)
    }

    #[tokio::test]
    async fn relays_client_secret_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/payments")
            .match_header("api-key", "sk_test_123")
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"payment_id":"pay_1","client_secret":"secret_abc","status":"requires_payment_method"}"#,
            )
            .create_async()
            .await;

        let client = GatewayClient::new(server.url(), "sk_test_123");
        let intent = client.create_payment_intent(&demo_request()).await.unwrap();

        assert_eq!(intent.client_secret.as_deref(), Some("secret_abc"));
        assert_eq!(intent.extra["payment_id"], "pay_1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn surfaces_upstream_error_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/payments")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"type":"invalid_request","message":"card declined"}}"#)
            .create_async()
            .await;

        let client = GatewayClient::new(server.url(), "sk_test_123");
        let err = client
            .create_payment_intent(&demo_request())
            .await
            .unwrap_err();

        match err {
            RelayError::UpstreamPayment(message) => assert_eq!(message, "card declined"),
            other => panic!("expected upstream payment error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn falls_back_to_generic_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/payments")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{}}"#)
            .create_async()
            .await;

        let client = GatewayClient::new(server.url(), "sk_test_123");
        let err = client
            .create_payment_intent(&demo_request())
            .await
            .unwrap_err();

        match err {
            RelayError::UpstreamPayment(message) => assert_eq!(message, "Something went wrong."),
            other => panic!("expected upstream payment error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Nothing listens on port 9 (discard); the send itself fails.
        let client = GatewayClient::new("http://127.0.0.1:9", "sk_test_123");
        let err = client
            .create_payment_intent(&demo_request())
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Transport(_)));
    }

    #[tokio::test]
    async fn unparseable_body_is_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/payments")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let client = GatewayClient::new(server.url(), "sk_test_123");
        let err = client
            .create_payment_intent(&demo_request())
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Transport(_)));
    }
}
