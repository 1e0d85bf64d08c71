//! Route definitions for purchases.

use axum::routing::get;
use axum::Router;

use crate::handlers::purchase;
use crate::state::AppState;

/// Routes mounted at `/purchases`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// PATCH  /{id}   -> patch
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(purchase::list).post(purchase::create))
        .route(
            "/{id}",
            get(purchase::get_by_id)
                .put(purchase::update)
                .patch(purchase::patch)
                .delete(purchase::delete),
        )
}
