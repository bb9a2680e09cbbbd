// MySQL adapter for the generic repository
//
// Statements are built from the entity's column mapping, so one adapter
// serves every table. Each write runs on its own connection and is committed
// before the call returns.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::mysql::{MySql, MySqlArguments, MySqlPool, MySqlRow};
use sqlx::query::Query;
use sqlx::FromRow;

use crate::core::{AppError, Entity, Repository, Result};

/// Table mapping for entities persisted by [`MySqlRepository`]
pub trait MySqlEntity: Entity + for<'r> FromRow<'r, MySqlRow> + Unpin {
    /// Table name
    const TABLE: &'static str;

    /// Non-id columns, in the order `bind_columns` binds them
    const COLUMNS: &'static [&'static str];

    /// Bind every non-id field in `COLUMNS` order
    fn bind_columns<'q>(
        &'q self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments>;
}

/// Repository backed by a MySQL connection pool
pub struct MySqlRepository<T> {
    pool: MySqlPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for MySqlRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: MySqlEntity> MySqlRepository<T> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!("SELECT id, {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
    }

    fn insert_sql(with_id: bool) -> String {
        let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
        if with_id {
            format!(
                "INSERT INTO {} (id, {}) VALUES (?, {})",
                T::TABLE,
                T::COLUMNS.join(", "),
                placeholders
            )
        } else {
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                T::TABLE,
                T::COLUMNS.join(", "),
                placeholders
            )
        }
    }

    fn update_sql() -> String {
        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        format!("UPDATE {} SET {} WHERE id = ?", T::TABLE, assignments)
    }

    fn stale(entity: &T) -> AppError {
        AppError::concurrency(format!(
            "{} {} no longer exists in the store",
            T::KIND,
            entity.id()
        ))
    }
}

#[async_trait]
impl<T: MySqlEntity> Repository<T> for MySqlRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>> {
        let sql = Self::select_sql();
        let entities = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(kind = T::KIND, count = entities.len(), "Loaded all records");
        Ok(entities)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<T>> {
        let sql = format!("{} WHERE id = ?", Self::select_sql());
        let entity = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity)
    }

    async fn create(&self, entity: T) -> Result<T> {
        let requested_id = entity.id();

        let result = if requested_id == 0 {
            let sql = Self::insert_sql(false);
            entity
                .bind_columns(sqlx::query(&sql))
                .execute(&self.pool)
                .await?
        } else {
            let sql = Self::insert_sql(true);
            entity
                .bind_columns(sqlx::query(&sql).bind(requested_id))
                .execute(&self.pool)
                .await?
        };

        let id = if requested_id == 0 {
            i32::try_from(result.last_insert_id()).map_err(|_| {
                AppError::internal(format!(
                    "{} id {} does not fit the identifier type",
                    T::KIND,
                    result.last_insert_id()
                ))
            })?
        } else {
            requested_id
        };

        tracing::info!(kind = T::KIND, id, "Record created");
        Ok(entity.with_id(id))
    }

    async fn update(&self, entity: &T) -> Result<()> {
        let sql = Self::update_sql();
        let mut tx = self.pool.begin().await?;

        let result = entity
            .bind_columns(sqlx::query(&sql))
            .bind(entity.id())
            .execute(&mut *tx)
            .await?;

        // MySQL may report zero rows for an unchanged match; probe before
        // calling it stale.
        if result.rows_affected() == 0 {
            let probe = format!("SELECT COUNT(*) FROM {} WHERE id = ?", T::TABLE);
            let matching: i64 = sqlx::query_scalar::<_, i64>(&probe)
                .bind(entity.id())
                .fetch_one(&mut *tx)
                .await?;
            if matching == 0 {
                tx.rollback().await?;
                tracing::warn!(
                    kind = T::KIND,
                    id = entity.id(),
                    "Update targeted a missing record"
                );
                return Err(Self::stale(entity));
            }
        }

        tx.commit().await?;
        tracing::info!(kind = T::KIND, id = entity.id(), "Record updated");
        Ok(())
    }

    async fn delete(&self, entity: &T) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let result = sqlx::query(&sql)
            .bind(entity.id())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(
                kind = T::KIND,
                id = entity.id(),
                "Delete targeted a missing record"
            );
            return Err(Self::stale(entity));
        }

        tracing::info!(kind = T::KIND, id = entity.id(), "Record deleted");
        Ok(())
    }
}
