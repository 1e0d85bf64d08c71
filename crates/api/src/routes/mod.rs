pub mod health;
pub mod purchase;
pub mod rental;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rentals                 list, create
/// /rentals/{id}            get, replace, merge-patch, delete
///
/// /purchases               list, create
/// /purchases/{id}          get, replace, merge-patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rentals", rental::router())
        .nest("/purchases", purchase::router())
}
