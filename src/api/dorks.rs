use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::dork::{build_query, build_search_url};
use crate::error::ApiError;
use crate::models::{DorkCriteria, DorkResponse, NewSavedDork, SavedDork};
use crate::state::AppState;

/// POST /api/generate - 生成Dork查询
pub async fn generate_dork(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DorkCriteria>, JsonRejection>,
) -> Result<Json<DorkResponse>, ApiError> {
    let Json(criteria) = payload.map_err(|e| {
        tracing::warn!("Rejected generate request: {}", e.body_text());
        ApiError::from(e)
    })?;

    let query = build_query(&criteria);
    let url = build_search_url(&state.search.engine_url, &query, state.search.encode_query);
    tracing::debug!("Generated dork for {}: {}", criteria.domain, query);

    Ok(Json(DorkResponse { query, url }))
}

/// GET /api/dorks - 已保存的Dork列表
pub async fn list_dorks(State(state): State<Arc<AppState>>) -> Json<Vec<SavedDork>> {
    Json(state.store.list())
}

/// POST /api/dorks - 保存Dork
pub async fn save_dork(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewSavedDork>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedDork>), ApiError> {
    let Json(entry) = payload.map_err(|e| {
        tracing::warn!("Rejected save request: {}", e.body_text());
        ApiError::from(e)
    })?;

    let saved = state.store.add(entry);
    tracing::info!("Saved dork {} ({})", saved.id, saved.name);

    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/dorks/:id - 删除Dork
pub async fn delete_dork(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id: i64 = raw_id
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid ID format".to_string()))?;

    // negative ids are well-formed but can never match
    let removed = u64::try_from(id)
        .map(|id| state.store.delete_by_id(id))
        .unwrap_or(false);

    if !removed {
        return Err(ApiError::NotFound("Dork not found".to_string()));
    }

    tracing::info!("Deleted dork {}", id);
    Ok(Json(json!({ "message": "Dork deleted successfully" })))
}
