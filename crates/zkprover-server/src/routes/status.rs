use axum::extract::State;
use axum::{Json, Router, routing::get};
use zkprover_core::domain::GetStatusResponse;

use crate::state::AppState;

/// GET /v1/status
async fn get_status(State(state): State<AppState>) -> Json<GetStatusResponse> {
    Json(state.service.get_status().await)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(get_status))
}
