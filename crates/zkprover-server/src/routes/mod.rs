//! Route tree.
//!
//! ```text
//! GET  /health
//! POST /v1/proofs                 GenProof
//! GET  /v1/proofs/stream          GetProof exchange (WebSocket)
//! POST /v1/proofs/cancel          Cancel
//! GET  /v1/status                 GetStatus
//! POST /v1/execute                Execute (not implemented)
//! POST /v1/batch-proposals/sync   SynchronizeBatchProposal (not implemented)
//! ```

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod proofs;
pub mod status;

/// Routes mounted under `/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(proofs::router())
        .merge(status::router())
}
