//! Application layer: the prover operations, built on the registry and ports.
//!
//! - **ServiceBuilder**: wiring and startup checks
//! - **ProverService**: GenProof / GetProof / GetStatus / Cancel
//! - **poll_loop**: one GetProof exchange (recv, poll, send)
//! - **status**: GetStatus snapshot

pub mod builder;
pub mod poll_loop;
pub mod service;
pub mod status;

pub use self::builder::{BuildError, ServiceBuilder};
pub use self::poll_loop::run_exchange;
pub use self::service::ProverService;
pub use self::status::{SERVER_PROTO_VERSION, SERVER_VERSION, Versions};
