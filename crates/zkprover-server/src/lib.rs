//! zkprover-server
//!
//! HTTP + WebSocket front end for the mock prover in `zkprover-core`.
//! Exposes config, state, error handling, routes and the WebSocket transport
//! so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;
pub mod ws;
