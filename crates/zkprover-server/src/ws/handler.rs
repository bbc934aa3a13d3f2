use axum::extract::State;
use axum::extract::ws::{WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use tracing::Instrument;
use zkprover_core::domain::ExchangeError;

use super::channel::WsPollChannel;
use crate::state::AppState;

/// GET /v1/proofs/stream -- upgrade to WebSocket and serve one GetProof exchange.
pub async fn poll_stream_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Run the exchange until the peer closes, the connection breaks, or the
/// server shuts down.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!("get_proof", conn_id = %conn_id);

    async move {
        tracing::info!("Poll exchange opened");

        let cancel = state.shutdown.child_token();
        let mut channel = WsPollChannel::new(socket, cancel.clone(), state.exchanges.clone());
        state.exchanges.record_opened();

        match state.service.get_proof(&mut channel, &cancel).await {
            Ok(()) => {
                state.exchanges.record_closed_by_peer();
                tracing::info!("Poll exchange closed by peer");
            }
            Err(ExchangeError::Cancelled) => {
                state.exchanges.record_cancelled();
                tracing::info!("Poll exchange cancelled");
            }
        }

        channel.close().await;
    }
    .instrument(span)
    .await
}
