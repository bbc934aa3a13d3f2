use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use tokio_util::sync::CancellationToken;
use zkprover_core::domain::{GetProofRequest, GetProofResponse, StreamError};
use zkprover_core::ports::PollChannel;

use super::stats::ExchangeStats;

/// [`PollChannel`] over an upgraded axum WebSocket.
///
/// - Text frame: parsed as a poll; bad JSON is `Malformed` (the exchange goes on).
/// - Binary frame: `Malformed`.
/// - Ping / Pong: skipped.
/// - Close frame or end of stream: clean close.
/// - Transport error: `Transport`, and the `disconnect` token is cancelled so
///   the exchange stops at its next iteration.
pub struct WsPollChannel {
    socket: WebSocket,
    disconnect: CancellationToken,
    stats: Arc<ExchangeStats>,
}

impl WsPollChannel {
    pub fn new(socket: WebSocket, disconnect: CancellationToken, stats: Arc<ExchangeStats>) -> Self {
        Self {
            socket,
            disconnect,
            stats,
        }
    }

    /// Send a Close frame. The peer may already be gone, so failure is only logged.
    pub async fn close(mut self) {
        if let Err(e) = self.socket.send(Message::Close(None)).await {
            tracing::debug!(error = %e, "Close frame not delivered");
        }
    }

    /// A broken socket never recovers; stop the exchange instead of polling it again.
    fn transport_failed(&self, error: String) -> StreamError {
        self.stats.record_transport_error();
        self.disconnect.cancel();
        StreamError::Transport(error)
    }
}

#[async_trait]
impl PollChannel for WsPollChannel {
    async fn recv(&mut self) -> Result<Option<GetProofRequest>, StreamError> {
        loop {
            let Some(frame) = self.socket.recv().await else {
                return Ok(None);
            };

            match frame {
                Ok(Message::Text(text)) => {
                    return serde_json::from_str(text.as_str())
                        .map(Some)
                        .map_err(|e| StreamError::Malformed(e.to_string()));
                }
                Ok(Message::Binary(_)) => {
                    return Err(StreamError::Malformed(
                        "binary frames are not supported".to_string(),
                    ));
                }
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => continue,
                Ok(Message::Close(_)) => return Ok(None),
                Err(e) => return Err(self.transport_failed(e.to_string())),
            }
        }
    }

    async fn send(&mut self, response: GetProofResponse) -> Result<(), StreamError> {
        // Encoding failure is local to this reply; the socket is still usable.
        let text = serde_json::to_string(&response)
            .map_err(|e| StreamError::Transport(format!("encode reply: {e}")))?;
        self.socket
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| self.transport_failed(e.to_string()))
    }
}
