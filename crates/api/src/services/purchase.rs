use operator_core::error::CoreError;
use operator_core::types::DbId;
use operator_db::models::purchase::{CreatePurchase, PatchPurchase, Purchase};
use operator_db::DbPool;

use super::MovieGate;

const ENTITY: &str = "Purchase";

/// Purchase counterpart of [`RentalService`](super::RentalService); same
/// rules, same not-found policy for every update.
pub struct PurchaseService {
    pool: DbPool,
    gate: MovieGate,
}

impl PurchaseService {
    pub fn new(pool: DbPool, gate: MovieGate) -> Self {
        Self { pool, gate }
    }

    pub async fn list(&self) -> Vec<Purchase> {
        self.pool.purchases.list().await
    }

    pub async fn get(&self, id: DbId) -> Result<Purchase, CoreError> {
        self.pool
            .purchases
            .find_by_id(id)
            .await
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    pub async fn create(&self, input: CreatePurchase) -> Result<Purchase, CoreError> {
        self.gate.ensure_exists(input.movie_id).await?;

        let purchase = self.pool.purchases.insert(input).await;
        tracing::info!(
            purchase_id = purchase.id,
            movie_id = purchase.movie_id,
            "Purchase created"
        );
        Ok(purchase)
    }

    pub async fn full_update(
        &self,
        id: DbId,
        input: CreatePurchase,
    ) -> Result<Purchase, CoreError> {
        let purchase = self
            .pool
            .purchases
            .replace(id, input)
            .await
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(purchase_id = id, "Purchase replaced");
        Ok(purchase)
    }

    pub async fn partial_update(
        &self,
        id: DbId,
        patch: PatchPurchase,
    ) -> Result<Purchase, CoreError> {
        let purchase = self
            .pool
            .purchases
            .update(id, |purchase| purchase.apply_patch(patch))
            .await
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::info!(purchase_id = id, "Purchase patched");
        Ok(purchase)
    }

    pub async fn delete(&self, id: DbId) {
        let removed = self.pool.purchases.delete(id).await;
        tracing::info!(purchase_id = id, removed, "Purchase deleted");
    }
}
