//! Dashboard HTTP Server
//!
//! Serves the dashboard page and a JSON API, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - HTML page for the active section
//! - `POST /select` - Menu form target (`section=<id>`), redirects to `/`
//!
//! ## Sections
//! - `GET /api/v1/sections` - Menu with active flags
//! - `GET /api/v1/sections/active` - Active section
//! - `PUT /api/v1/sections/active` - Select a section
//!
//! ## Panels
//! - `GET /api/v1/panel` - Active panel view model
//! - `GET /api/v1/panels/:id` - Panel for any section id
//!
//! ## Datasets
//! - `GET /api/v1/datasets` - List dataset names
//! - `GET /api/v1/datasets/:name` - Get one table
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use screening_dashboard::api::{serve, AppState};
//! use screening_dashboard::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default().into_config();
//!     let state = AppState::from_config(&config);
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Section routes
        .route("/sections", get(routes::sections::list_sections))
        .route(
            "/sections/active",
            get(routes::sections::get_active).put(routes::sections::set_active),
        )
        // Panel routes
        .route("/panel", get(routes::panels::active_panel))
        .route("/panels/:id", get(routes::panels::get_panel))
        // Dataset routes
        .route("/datasets", get(routes::datasets::list_datasets))
        .route("/datasets/:name", get(routes::datasets::get_dataset));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/select", post(routes::dashboard::select))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Screening dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Screening dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
