//! Rental lifecycle: catalog-gated creation, full replacement, merge-patch,
//! idempotent deletion.

use operator_core::error::CoreError;
use operator_core::types::DbId;
use operator_db::models::rental::{CreateRental, PatchRental, Rental};
use operator_db::DbPool;

use super::MovieGate;

const ENTITY: &str = "Rental";

pub struct RentalService {
    pool: DbPool,
    gate: MovieGate,
}

impl RentalService {
    pub fn new(pool: DbPool, gate: MovieGate) -> Self {
        Self { pool, gate }
    }

    pub async fn list(&self) -> Vec<Rental> {
        self.pool.rentals.list().await
    }

    pub async fn get(&self, id: DbId) -> Result<Rental, CoreError> {
        self.pool
            .rentals
            .find_by_id(id)
            .await
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Create a rental once the catalog confirms its movie exists.
    ///
    /// Nothing is stored when the check fails.
    pub async fn create(&self, input: CreateRental) -> Result<Rental, CoreError> {
        self.gate.ensure_exists(input.movie_id).await?;

        let rental = self.pool.rentals.insert(input).await;
        tracing::info!(rental_id = rental.id, movie_id = rental.movie_id, "Rental created");
        Ok(rental)
    }

    /// Overwrite every field of rental `id`, including with nulls and zeros.
    pub async fn full_update(&self, id: DbId, input: CreateRental) -> Result<Rental, CoreError> {
        let rental = self
            .pool
            .rentals
            .replace(id, input)
            .await
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(rental_id = id, "Rental replaced");
        Ok(rental)
    }

    /// Merge the present fields of `patch` into rental `id`.
    ///
    /// The catalog is not consulted, so a patched `movie_id` is not verified.
    pub async fn partial_update(&self, id: DbId, patch: PatchRental) -> Result<Rental, CoreError> {
        let rental = self
            .pool
            .rentals
            .update(id, |rental| rental.apply_patch(patch))
            .await
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(rental_id = id, "Rental patched");
        Ok(rental)
    }

    /// Remove rental `id`. Removing an absent rental is not an error.
    pub async fn delete(&self, id: DbId) {
        let removed = self.pool.rentals.delete(id).await;
        tracing::info!(rental_id = id, removed, "Rental deleted");
    }
}
