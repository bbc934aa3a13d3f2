//! zkprover-core
//!
//! Core of a mock zk-prover service: clients submit proof jobs, receive an
//! id, and poll for the result over a long-lived exchange.
//!
//! # Modules
//! - **domain**: ids, job state, mock proof, messages, errors
//! - **ports**: Clock, CompletionPolicy, PollChannel
//! - **registry**: JobRegistry (id allocation and job state)
//! - **app**: ProverService, the poll loop, status, builder

pub mod app;
pub mod domain;
pub mod ports;
pub mod registry;

pub use app::{ProverService, ServiceBuilder};
pub use registry::JobRegistry;
