pub mod purchase;
pub mod rental;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;
use operator_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Unwrap an entity id path segment, reporting a non-numeric id as
/// [`AppError::BadRequest`].
pub(crate) fn entity_id(path: Result<Path<DbId>, PathRejection>) -> Result<DbId, AppError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwrap a JSON create/replace body, reporting malformed input as
/// [`AppError::BadRequest`].
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwrap a merge-patch body, reporting malformed input as
/// [`AppError::InvalidPatch`].
///
/// A merge patch must be a JSON object; arrays and scalars are rejected
/// before the body is mapped onto the patch fields.
pub(crate) fn patch_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::InvalidPatch(rejection.body_text()))?;
    if !body.is_object() {
        return Err(AppError::InvalidPatch(
            "Merge patch body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(body).map_err(|e| AppError::InvalidPatch(e.to_string()))
}
