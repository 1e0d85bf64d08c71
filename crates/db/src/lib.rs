//! In-memory persistence for rentals and purchases.
//!
//! Each entity type lives in its own [`EntityStore`]; the pair is bundled
//! into a [`MemoryDb`] and shared through [`DbPool`].

use std::sync::Arc;

pub mod models;
pub mod store;

use models::purchase::Purchase;
use models::rental::Rental;
pub use store::{EntityStore, Record};

/// All entity collections held by the service.
#[derive(Default)]
pub struct MemoryDb {
    pub rentals: EntityStore<Rental>,
    pub purchases: EntityStore<Purchase>,
}

pub type DbPool = Arc<MemoryDb>;

/// Create an empty database handle.
pub fn create_pool() -> DbPool {
    tracing::debug!("Creating in-memory entity stores");
    Arc::new(MemoryDb::default())
}
