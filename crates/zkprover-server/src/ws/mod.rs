//! WebSocket transport for the GetProof exchange.
//!
//! One WebSocket connection carries one exchange: every text frame from the
//! client is a JSON `GetProofRequest`, every text frame back is the matching
//! JSON `GetProofResponse`.

mod channel;
mod handler;
mod stats;

pub use channel::WsPollChannel;
pub use handler::poll_stream_handler;
pub use stats::{ExchangeSnapshot, ExchangeStats};
