use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::{AppError, Entity, Repository, Result};

/// In-memory repository.
///
/// Intended for tests and database-free local runs. Mirrors the MySQL
/// adapter: ids are assigned on create when the entity carries 0, and
/// updates or deletes against a missing record are concurrency errors.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: RwLock<BTreeMap<i32, T>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with the given records, keyed by their ids
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let records = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> Result<usize> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn poisoned() -> AppError {
        AppError::internal(format!("{} store lock poisoned", T::KIND))
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(records.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<T>> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(records.get(&id).cloned())
    }

    async fn create(&self, entity: T) -> Result<T> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        let id = match entity.id() {
            0 => match records.keys().next_back() {
                Some(last) => last.checked_add(1).ok_or_else(|| {
                    AppError::internal(format!("{} id space exhausted", T::KIND))
                })?,
                None => 1,
            },
            id if records.contains_key(&id) => {
                return Err(AppError::internal(format!(
                    "duplicate {} id {}",
                    T::KIND,
                    id
                )));
            }
            id => id,
        };

        let created = entity.with_id(id);
        records.insert(id, created.clone());
        tracing::debug!(kind = T::KIND, id, "Record created in memory");
        Ok(created)
    }

    async fn update(&self, entity: &T) -> Result<()> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        match records.get_mut(&entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(())
            }
            None => Err(AppError::concurrency(format!(
                "{} {} no longer exists in the store",
                T::KIND,
                entity.id()
            ))),
        }
    }

    async fn delete(&self, entity: &T) -> Result<()> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        match records.remove(&entity.id()) {
            Some(_) => Ok(()),
            None => Err(AppError::concurrency(format!(
                "{} {} no longer exists in the store",
                T::KIND,
                entity.id()
            ))),
        }
    }
}
