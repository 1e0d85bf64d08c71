//! Generic in-memory entity collection with auto-increment identity.
//!
//! Records are kept in a `BTreeMap` keyed by id, so iteration order is
//! insertion order. Every operation takes the store lock for its whole
//! duration; merge updates run their closure under the write lock.

use std::collections::BTreeMap;

use operator_core::types::DbId;
use tokio::sync::RwLock;

/// A record type that can live in an [`EntityStore`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Everything a caller supplies when creating or replacing a record.
    type Draft: Send;

    /// Build the stored record for `id` from a draft.
    fn from_draft(id: DbId, draft: Self::Draft) -> Self;
}

struct StoreInner<T> {
    /// Next id to hand out. Never decremented, so ids are not reused.
    next_id: DbId,
    rows: BTreeMap<DbId, T>,
}

/// Lock-guarded collection of records of one type.
pub struct EntityStore<T> {
    inner: RwLock<StoreInner<T>>,
}

impl<T> EntityStore<T> {
    /// Create an empty store. The first inserted record gets id `1`.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EntityStore<T> {
    /// Assign the next id to `draft` and store it, returning the stored record.
    pub async fn insert(&self, draft: T::Draft) -> T {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let record = T::from_draft(id, draft);
        inner.rows.insert(id, record.clone());
        record
    }

    pub async fn find_by_id(&self, id: DbId) -> Option<T> {
        self.inner.read().await.rows.get(&id).cloned()
    }

    /// All records, ordered by id.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.rows.values().cloned().collect()
    }

    /// Overwrite every field of record `id` with `draft`, keeping the id.
    ///
    /// Returns `None` without storing anything if `id` is absent.
    pub async fn replace(&self, id: DbId, draft: T::Draft) -> Option<T> {
        let mut inner = self.inner.write().await;
        let slot = inner.rows.get_mut(&id)?;
        *slot = T::from_draft(id, draft);
        Some(slot.clone())
    }

    /// Apply `f` to record `id` in place and return the updated record.
    ///
    /// Returns `None` without calling `f` if `id` is absent.
    pub async fn update<F>(&self, id: DbId, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.write().await;
        let slot = inner.rows.get_mut(&id)?;
        f(slot);
        Some(slot.clone())
    }

    /// Remove record `id`. Returns whether a record was removed.
    pub async fn delete(&self, id: DbId) -> bool {
        self.inner.write().await.rows.remove(&id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
