//! Handlers for the `/rentals` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use operator_core::types::DbId;
use operator_db::models::rental::{CreateRental, PatchRental};

use super::{entity_id, json_body, patch_body};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/rentals
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rentals = state.rentals.list().await;
    Ok(Json(DataResponse { data: rentals }))
}

/// GET /api/v1/rentals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = entity_id(path)?;
    let rental = state.rentals.get(id).await?;
    Ok(Json(DataResponse { data: rental }))
}

/// POST /api/v1/rentals
///
/// Create a rental. Rejected with 400 when the movie is not in the catalog,
/// 502 when the catalog cannot be reached (under the default policy).
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRental>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?;
    let rental = state.rentals.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: rental })))
}

/// PUT /api/v1/rentals/{id}
///
/// Replace every field of a rental.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<CreateRental>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = entity_id(path)?;
    let input = json_body(payload)?;
    let rental = state.rentals.full_update(id, input).await?;
    Ok(Json(DataResponse { data: rental }))
}

/// PATCH /api/v1/rentals/{id}
///
/// Merge-patch a rental (`application/merge-patch+json`).
pub async fn patch(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = entity_id(path)?;
    let patch: PatchRental = patch_body(payload)?;
    let rental = state.rentals.partial_update(id, patch).await?;
    Ok(Json(DataResponse { data: rental }))
}

/// DELETE /api/v1/rentals/{id}
///
/// Always 204, whether or not the rental existed.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = entity_id(path)?;
    state.rentals.delete(id).await;
    Ok(StatusCode::NO_CONTENT)
}
