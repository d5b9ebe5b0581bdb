//! FastKitchen Pre-render Server
//!
//! Serves the built single-page app. Recipe pages (`/recipe/{id}`) get the
//! recipe's title, description and cover image written into `<title>` and
//! the Open Graph tags so shared links preview properly; every other path is
//! a static file or the unmodified shell.
//!
//! Environment:
//! - `FAST_KITCHEN_PORT` (3000)
//! - `FAST_KITCHEN_API_BASE` (https://api.flottekueche.de/)
//! - `FAST_KITCHEN_DIST` (dist)
//! - `FAST_KITCHEN_SITE_NAME` (FastKitchen)
//! - `FAST_KITCHEN_API_TIMEOUT_SECS` (5)
//! - `RUST_LOG` for log filtering
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod meta;
pub mod routes;
pub mod source;
pub mod state;

use config::Config;
use error::PrerenderResult;
use routes::{recipe_page_handler, static_handler};
use state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/recipe/{id}", get(recipe_page_handler))
        .route("/recipe/{id}/", get(recipe_page_handler))
        .fallback(static_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server() -> PrerenderResult<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let config = Config::load()?;
    let address = format!("0.0.0.0:{}", config.port);

    info!("Initializing state...");
    let state = AppState::new(config).await?;
    let app = build_router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
