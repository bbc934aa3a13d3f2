//! Error types.
//!
//! Nothing here is fatal to the process: unknown job ids are answered with a
//! `GetProofResult::Error` reply rather than an error value, and transport
//! failures only cost the single message they hit.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProverError {
    #[error("{0} is not implemented by the mock prover")]
    Unimplemented(&'static str),

    #[error("invalid hex literal: {0:?}")]
    InvalidHex(String),
}

/// Terminal outcome of a poll exchange that did not end with a clean close.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("poll exchange cancelled")]
    Cancelled,
}

/// Failure to move one message across a `PollChannel`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The peer sent something that is not a poll request.
    #[error("malformed poll message: {0}")]
    Malformed(String),

    /// The underlying transport failed.
    #[error("transport error: {0}")]
    Transport(String),
}
