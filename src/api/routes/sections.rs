//! Section Routes
//!
//! JSON access to the section router.
//!
//! - GET /api/v1/sections - Menu with active flags
//! - GET /api/v1/sections/active - Active section
//! - PUT /api/v1/sections/active - Select a section

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{
    ActiveSectionResponse, SectionDto, SectionListResponse, SelectRequest, SelectionResponse,
};
use crate::api::state::AppState;

/// GET /api/v1/sections
pub async fn list_sections(State(state): State<Arc<AppState>>) -> Json<SectionListResponse> {
    let router = state.router.read().await;

    let sections = router
        .sections()
        .iter()
        .map(|s| SectionDto {
            id: s.id,
            label: s.label,
            active: router.is_active(s.id),
        })
        .collect();

    Json(SectionListResponse {
        sections,
        active: router.active_id(),
        revision: router.revision(),
    })
}

/// GET /api/v1/sections/active
pub async fn get_active(State(state): State<Arc<AppState>>) -> Json<ActiveSectionResponse> {
    let router = state.router.read().await;
    Json(ActiveSectionResponse {
        section: router.active_section(),
        revision: router.revision(),
    })
}

/// PUT /api/v1/sections/active
///
/// Never rejects an id: unknown ids resolve to the default section and the
/// response reports `fallback: true`.
pub async fn set_active(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectRequest>,
) -> Json<SelectionResponse> {
    let selection = state.router.write().await.select(&req.section);
    Json(selection.into())
}
