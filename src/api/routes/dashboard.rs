//! Dashboard Page Routes
//!
//! Server-rendered HTML dashboard.
//!
//! - GET / - Page for the active section
//! - POST /select - Select a section from the menu form, then redirect to /

use axum::{
    extract::{Form, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::state::AppState;
use crate::render::{render_page, Renderer};

/// Form body posted by a menu button; a missing field selects the default
#[derive(Debug, Deserialize)]
pub struct SelectForm {
    #[serde(default)]
    pub section: String,
}

/// GET /
///
/// Render the full page for whichever section is active.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let router = state.router.read().await;
    let panel = Renderer::new(&state.registry).render(&router);
    Html(render_page(&panel, state.registry.source(), &state.page))
}

/// POST /select
///
/// Menu button handler. Unknown ids fall back to the default section.
pub async fn select(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SelectForm>,
) -> Redirect {
    let selection = state.router.write().await.select(&form.section);
    tracing::info!(
        section = %selection.active,
        fallback = selection.fallback,
        "Section selected from menu"
    );
    Redirect::to("/")
}
