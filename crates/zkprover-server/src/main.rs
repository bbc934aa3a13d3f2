//! Mock zk-prover server binary.
//!
//! Configuration comes from the environment (and `.env`, if present):
//!   HOST                  bind address (default: 0.0.0.0)
//!   PORT                  bind port (default: 50051)
//!   REQUEST_TIMEOUT_SECS  unary request timeout (default: 30)
//!   RUST_LOG              tracing filter

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use zkprover_core::ServiceBuilder;
use zkprover_server::config::ServerConfig;
use zkprover_server::router::build_app_router;
use zkprover_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zkprover_server=info,zkprover_core=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;
    info!(%addr, request_timeout_secs = config.request_timeout_secs, "Loaded server configuration");

    let service = ServiceBuilder::new().build()?;
    let shutdown = CancellationToken::new();
    let state = AppState::new(service, config, shutdown.clone());
    let app = build_app_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Mock prover listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGINT (or SIGTERM on Unix), then cancel every open exchange.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl-C received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }

    shutdown.cancel();
}
