//! Panel Routes
//!
//! Rendered panel view models as JSON.
//!
//! - GET /api/v1/panel - Panel for the active section
//! - GET /api/v1/panels/:id - Panel for any section id

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::PanelResponse;
use crate::api::state::AppState;
use crate::render::{Panel, Renderer};
use crate::section::SectionId;

/// GET /api/v1/panel
pub async fn active_panel(State(state): State<Arc<AppState>>) -> Json<Panel> {
    let router = state.router.read().await;
    Json(Renderer::new(&state.registry).render(&router))
}

/// GET /api/v1/panels/:id
///
/// Renders without touching the router. Unknown ids get the overview panel.
pub async fn get_panel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<PanelResponse> {
    let fallback = id.parse::<SectionId>().is_err();
    if fallback {
        tracing::warn!(requested = %id, "Unknown section id, rendering overview");
    }

    let panel = Renderer::new(&state.registry).render_id(&id);
    Json(PanelResponse {
        requested: id,
        fallback,
        panel,
    })
}
