use async_trait::async_trait;

use crate::core::Result;

/// A single persisted record with a store-owned integer identifier.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in logs and error messages
    const KIND: &'static str;

    /// Identifier as assigned by the store. Zero means "not yet assigned".
    fn id(&self) -> i32;

    /// Copy with the given identifier. Only store adapters call this.
    fn with_id(self, id: i32) -> Self;
}

/// Base repository trait for CRUD operations over one entity type.
///
/// Controllers depend on this trait only; storage details stay in the
/// adapters under `core::store`.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Snapshot of every entity. No filtering, ordering or pagination.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Find entity by ID. Absence is `Ok(None)`, never an error.
    async fn get_by_id(&self, id: i32) -> Result<Option<T>>;

    /// Persist a new entity and return it with the store-assigned ID.
    async fn create(&self, entity: T) -> Result<T>;

    /// Replace the stored entity whose ID matches `entity.id()`.
    ///
    /// Performs no existence check of its own; a record that has vanished
    /// surfaces as [`AppError::Concurrency`](crate::core::AppError::Concurrency).
    async fn update(&self, entity: &T) -> Result<()>;

    /// Remove a previously fetched entity.
    async fn delete(&self, entity: &T) -> Result<()>;
}
