//! Backend for the portfolio page.
//!
//! Serves the comment listing, comment form, bulk delete and account status
//! endpoints the page's script consumes. Comments live in memory only.

use std::{io, sync::Arc};

use axum::Router;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

use api::comments::routes::comments_router;
use auth::account_router;
use config::Config;
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(comments_router())
        .merge(account_router())
        .layer(middleware::cors())
        .layer(middleware::trace())
        .with_state(state)
}

pub async fn start_server() -> io::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let state = AppState::new(Config::load());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                warn!("Failed to install Ctrl+C handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
