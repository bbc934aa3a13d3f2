use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use zkprover_core::domain::{CancelRequest, CancelResponse, GenProofRequest, GenProofResponse};

use crate::error::AppResult;
use crate::state::AppState;
use crate::ws;

/// POST /v1/proofs
///
/// The body is taken raw: any payload, any content type, or none at all
/// registers a job.
async fn gen_proof(State(state): State<AppState>, body: Bytes) -> Json<GenProofResponse> {
    let request = GenProofRequest::from_body(&body);
    Json(state.service.gen_proof(request).await)
}

/// POST /v1/proofs/cancel
async fn cancel(
    State(state): State<AppState>,
    Json(request): Json<CancelRequest>,
) -> Json<CancelResponse> {
    Json(state.service.cancel(request).await)
}

/// POST /v1/execute
async fn execute(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.service.execute().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/batch-proposals/sync
async fn synchronize_batch_proposal(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.service.synchronize_batch_proposal().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/proofs", post(gen_proof))
        .route("/proofs/stream", get(ws::poll_stream_handler))
        .route("/proofs/cancel", post(cancel))
        .route("/execute", post(execute))
        .route("/batch-proposals/sync", post(synchronize_batch_proposal))
}
