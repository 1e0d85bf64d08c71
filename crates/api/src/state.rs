use std::sync::Arc;

use crate::services::{PurchaseService, RentalService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory entity stores.
    pub pool: operator_db::DbPool,
    pub rentals: Arc<RentalService>,
    pub purchases: Arc<PurchaseService>,
}
