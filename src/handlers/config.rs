use crate::models::ConfigResponse;
use axum::{extract::State, Json};

use super::AppState;

// Always 200; an unset publishable key comes back as null, not an error.
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        publishable_key: state.config.publishable_key.clone(),
    })
}
