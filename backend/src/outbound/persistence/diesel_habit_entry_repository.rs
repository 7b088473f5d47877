//! PostgreSQL-backed `HabitEntryRepository` implementation using Diesel ORM.
//!
//! Each call checks out its own pooled connection; the guard returns it to
//! the pool when dropped.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{EntrySample, HabitEntryRepository, HabitEntryRepositoryError};
use crate::domain::{HabitEntry, HabitReading};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{HabitEntryRow, NewHabitEntryRow};
use super::pool::{DbPool, PoolError};
use super::schema::habit_entries;

/// Diesel-backed implementation of the habit entry repository port.
#[derive(Clone)]
pub struct DieselHabitEntryRepository {
    pool: DbPool,
}

impl DieselHabitEntryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HabitEntryRepositoryError {
    map_basic_pool_error(error, HabitEntryRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> HabitEntryRepositoryError {
    map_basic_diesel_error(
        error,
        HabitEntryRepositoryError::query,
        HabitEntryRepositoryError::connection,
    )
}

#[async_trait]
impl HabitEntryRepository for DieselHabitEntryRepository {
    async fn insert(
        &self,
        reading: &HabitReading,
        recorded_at: DateTime<Utc>,
    ) -> Result<HabitEntry, HabitEntryRepositoryError> {
        let new_row = NewHabitEntryRow::new(reading, recorded_at);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(habit_entries::table)
                        .values(&new_row)
                        .returning(HabitEntryRow::as_returning())
                        .get_result::<HabitEntryRow>(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        debug!(entry_id = row.id, "habit entry row inserted");
        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<HabitEntry>, HabitEntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = habit_entries::table
            .select(HabitEntryRow::as_select())
            .order((habit_entries::recorded_at.desc(), habit_entries::id.desc()))
            .load::<HabitEntryRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(HabitEntry::from).collect())
    }

    async fn count(&self) -> Result<u64, HabitEntryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total = habit_entries::table
            .count()
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(total)
            .map_err(|_| HabitEntryRepositoryError::query("negative row count"))
    }

    async fn sample(&self, limit: usize) -> Result<EntrySample, HabitEntryRepositoryError> {
        let limit = i64::try_from(limit)
            .map_err(|_| HabitEntryRepositoryError::query("limit exceeds i64 range"))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Repeatable read keeps the count and the rows on one snapshot.
        let (total, rows) = conn
            .build_transaction()
            .read_only()
            .repeatable_read()
            .run(|conn| {
                async move {
                    let total = habit_entries::table
                        .count()
                        .get_result::<i64>(conn)
                        .await?;
                    let rows = habit_entries::table
                        .select(HabitEntryRow::as_select())
                        .order((habit_entries::recorded_at.desc(), habit_entries::id.desc()))
                        .limit(limit)
                        .load::<HabitEntryRow>(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>((total, rows))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(EntrySample {
            total: u64::try_from(total)
                .map_err(|_| HabitEntryRepositoryError::query("negative row count"))?,
            newest: rows.into_iter().map(HabitEntry::from).collect(),
        })
    }
}
