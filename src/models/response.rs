use serde::{Deserialize, Serialize};

/// What the front-end SDK needs to initialize itself.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConfigResponse {
    #[serde(rename = "publishableKey")]
    pub publishable_key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatePaymentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: Option<String>,
}

/// A successful gateway reply. Only the client secret matters to the relay;
/// everything else the gateway returns rides along untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentIntent {
    pub client_secret: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
