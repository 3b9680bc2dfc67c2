//! Screening Dashboard Server
//!
//! Run with: cargo run --bin screening-dashboard
//!
//! # Configuration
//!
//! Read from the first `config.toml` found in the user config directory,
//! `/etc/screening-dashboard/` or the working directory. Environment
//! variables override the file:
//! - `DASHBOARD_HOST`: Host to bind to (default: 127.0.0.1)
//! - `DASHBOARD_PORT`: Port to listen on (default: 8084)
//! - `DASHBOARD_DEFAULT_SECTION`: Initial and fallback section (default: overview)
//! - `DASHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `DASHBOARD_LOG_FORMAT`: `pretty` or `json`
//! - `RUST_LOG`: Full filter directive, overrides the log level

use anyhow::Context;
use screening_dashboard::api::{serve, AppState};
use screening_dashboard::config::Config;
use screening_dashboard::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let load = Config::load_default();
    logging::init(&load.config.logging);
    load.log();
    let config = load.into_config();

    tracing::info!(
        "Starting screening dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = AppState::from_config(&config);

    // Inconsistent tables are served anyway; readiness reports them
    match state.registry.validate() {
        Ok(()) => tracing::info!(
            datasets = state.registry.names().len(),
            "Dataset registry validated"
        ),
        Err(e) => tracing::error!("Dataset registry failed validation: {}", e),
    }

    tracing::info!(
        default_section = %config.dashboard.default_section_id(),
        "Dashboard default section"
    );

    serve(state, &config.server)
        .await
        .with_context(|| format!("server on {} failed", config.server.addr()))?;

    tracing::info!("Screening dashboard stopped");
    Ok(())
}
