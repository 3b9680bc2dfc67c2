//! Dataset Routes
//!
//! Read-only access to the literal survey tables.
//!
//! - GET /api/v1/datasets - List dataset names
//! - GET /api/v1/datasets/:name - Get one table

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::DatasetListResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/datasets
pub async fn list_datasets(State(state): State<Arc<AppState>>) -> Json<DatasetListResponse> {
    let datasets = state.registry.names();
    Json(DatasetListResponse {
        total: datasets.len(),
        datasets,
    })
}

/// GET /api/v1/datasets/:name
pub async fn get_dataset(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let dataset = state.registry.get_by_name(&name)?;
    let value = serde_json::to_value(dataset)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize dataset {}: {}", name, e)))?;
    Ok(Json(value))
}
