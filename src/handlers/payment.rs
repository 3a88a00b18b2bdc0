use crate::{
    error::RelayError,
    models::{CreatePaymentResponse, PaymentRequest},
};
use axum::{extract::State, Json};

use super::AppState;

/// Creates a payment intent for the fixed demo order and hands the client
/// secret back to the front-end. The inbound request body is ignored.
pub async fn create_payment_intent(
    State(state): State<AppState>,
) -> Result<Json<CreatePaymentResponse>, RelayError> {
    let request = PaymentRequest::demo(state.config.profile_id.clone());
    let intent = state.gateway.create_payment_intent(&request).await?;

    Ok(Json(CreatePaymentResponse {
        client_secret: intent.client_secret,
    }))
}
