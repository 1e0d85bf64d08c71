//! Handlers for the `/purchases` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use operator_core::types::DbId;
use operator_db::models::purchase::{CreatePurchase, PatchPurchase};

use super::{entity_id, json_body, patch_body};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/purchases
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let purchases = state.purchases.list().await;
    Ok(Json(DataResponse { data: purchases }))
}

/// GET /api/v1/purchases/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = entity_id(path)?;
    let purchase = state.purchases.get(id).await?;
    Ok(Json(DataResponse { data: purchase }))
}

/// POST /api/v1/purchases
///
/// Create a purchase after the catalog confirms the movie.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePurchase>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?;
    let purchase = state.purchases.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: purchase })))
}

/// PUT /api/v1/purchases/{id}
///
/// Replace every field of a purchase.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<CreatePurchase>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = entity_id(path)?;
    let input = json_body(payload)?;
    let purchase = state.purchases.full_update(id, input).await?;
    Ok(Json(DataResponse { data: purchase }))
}

/// PATCH /api/v1/purchases/{id}
///
/// Merge-patch a purchase (`application/merge-patch+json`).
pub async fn patch(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = entity_id(path)?;
    let patch: PatchPurchase = patch_body(payload)?;
    let purchase = state.purchases.partial_update(id, patch).await?;
    Ok(Json(DataResponse { data: purchase }))
}

/// DELETE /api/v1/purchases/{id}
///
/// Always 204, whether or not the purchase existed.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = entity_id(path)?;
    state.purchases.delete(id).await;
    Ok(StatusCode::NO_CONTENT)
}
