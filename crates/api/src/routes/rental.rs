//! Route definitions for rentals.

use axum::routing::get;
use axum::Router;

use crate::handlers::rental;
use crate::state::AppState;

/// Routes mounted at `/rentals`.
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
        .route("/", get(rental::list).post(rental::create))
        .route(
            "/{id}",
            get(rental::get_by_id)
                .put(rental::update)
                .patch(rental::patch)
                .delete(rental::delete),
        )
}
