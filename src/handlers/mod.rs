pub mod config;
pub mod payment;

pub use config::*;
pub use payment::*;

use crate::client::GatewayClient;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<crate::config::Config>,
    pub gateway: Arc<GatewayClient>,
}

/// The relay's whole HTTP surface: two API routes, everything else falls
/// through to the static front-end assets.
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.config.static_dir.clone());

    Router::new()
        .route("/config", get(get_config))
        .route("/create-payment-intent", post(create_payment_intent))
        .fallback_service(assets)
        .with_state(state)
}
