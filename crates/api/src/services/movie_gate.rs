use std::sync::Arc;

use operator_catalog::{CatalogLookup, MovieCatalog};
use operator_core::catalog_policy::CatalogFailurePolicy;
use operator_core::error::CoreError;
use operator_core::types::DbId;

/// Creation-time check that a movie exists in the catalog.
#[derive(Clone)]
pub struct MovieGate {
    catalog: Arc<dyn MovieCatalog>,
    policy: CatalogFailurePolicy,
}

impl MovieGate {
    pub fn new(catalog: Arc<dyn MovieCatalog>, policy: CatalogFailurePolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> CatalogFailurePolicy {
        self.policy
    }

    /// Succeed only if the catalog knows `movie_id`, or if the catalog is
    /// unreachable and the failure policy lets the creation through.
    pub async fn ensure_exists(&self, movie_id: DbId) -> Result<(), CoreError> {
        match self.catalog.lookup(movie_id).await {
            CatalogLookup::Found(_) => Ok(()),
            CatalogLookup::NotFound => Err(CoreError::MovieNotFound { movie_id }),
            CatalogLookup::Unavailable(reason) => {
                let outcome = self.policy.resolve(movie_id, &reason);
                if outcome.is_ok() {
                    tracing::warn!(
                        movie_id,
                        reason = %reason,
                        "Catalog unavailable, accepting movie unverified"
                    );
                }
                outcome
            }
        }
    }
}
