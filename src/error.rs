use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    // The gateway processed the request and rejected the payment; the message
    // is the upstream one, relayed verbatim.
    #[error("{0}")]
    UpstreamPayment(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: ErrorMessage,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorMessage {
    pub message: String,
}

// The front-end contract makes no distinction between a declined payment and
// an unreachable gateway: both come back as a 500 with a message.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "payment intent creation failed");

        let body = ErrorBody {
            error: ErrorMessage {
                message: self.to_string(),
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
