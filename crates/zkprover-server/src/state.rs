use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use zkprover_core::ProverService;

use crate::config::ServerConfig;
use crate::ws::ExchangeStats;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// The single prover service instance (owns the job registry).
    pub service: Arc<ProverService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cancelled on shutdown; every poll exchange runs under a child token.
    pub shutdown: CancellationToken,
    /// Outcome counters for poll exchanges.
    pub exchanges: Arc<ExchangeStats>,
}

impl AppState {
    pub fn new(service: ProverService, config: ServerConfig, shutdown: CancellationToken) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
            shutdown,
            exchanges: Arc::new(ExchangeStats::new()),
        }
    }
}
