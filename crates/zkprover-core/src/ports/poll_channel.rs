//! PollChannel port - one peer's side of a poll exchange.
//!
//! The transport (WebSocket, gRPC stream, in-memory channel in tests) lives
//! outside the core. The exchange loop only needs to pull the next poll and
//! push a reply.

use async_trait::async_trait;

use crate::domain::{GetProofRequest, GetProofResponse, StreamError};

/// Bidirectional message channel for a single exchange.
///
/// # Contract
/// - `recv` returns `Ok(None)` once the peer has cleanly closed its sending side.
/// - `recv` errors are per-message: the caller may keep receiving afterwards.
/// - `send` errors are per-message as well.
#[async_trait]
pub trait PollChannel: Send {
    async fn recv(&mut self) -> Result<Option<GetProofRequest>, StreamError>;

    async fn send(&mut self, response: GetProofResponse) -> Result<(), StreamError>;
}
