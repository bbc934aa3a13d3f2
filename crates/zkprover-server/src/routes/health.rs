use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use zkprover_core::domain::JobCounts;

use crate::state::AppState;
use crate::ws::ExchangeSnapshot;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub jobs: JobCounts,
    pub exchanges: ExchangeSnapshot,
}

/// GET /health -- liveness, registry size by state, exchange outcomes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        jobs: state.service.job_counts().await,
        exchanges: state.exchanges.snapshot(),
    })
}

/// Mount health check routes (root level, NOT under `/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
