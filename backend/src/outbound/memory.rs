//! In-process habit entry store.
//!
//! Used when no database is configured and as a fast double in HTTP tests.
//! Entries live only as long as the process.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{EntrySample, HabitEntryRepository, HabitEntryRepositoryError};
use crate::domain::{HabitEntry, HabitEntryId, HabitReading};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    entries: Vec<HabitEntry>,
}

/// `Mutex<Vec<_>>` implementation of [`HabitEntryRepository`].
#[derive(Debug, Default)]
pub struct InMemoryHabitEntryRepository {
    store: Mutex<Store>,
}

impl InMemoryHabitEntryRepository {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Store>, HabitEntryRepositoryError> {
        self.store
            .lock()
            .map_err(|_| HabitEntryRepositoryError::connection("in-memory store poisoned"))
    }

    fn newest_first(store: &Store) -> impl Iterator<Item = &HabitEntry> {
        let mut ordered: Vec<&HabitEntry> = store.entries.iter().collect();
        ordered.sort_by(|a, b| {
            b.recorded_at()
                .cmp(&a.recorded_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        ordered.into_iter()
    }
}

#[async_trait]
impl HabitEntryRepository for InMemoryHabitEntryRepository {
    async fn insert(
        &self,
        reading: &HabitReading,
        recorded_at: DateTime<Utc>,
    ) -> Result<HabitEntry, HabitEntryRepositoryError> {
        let mut store = self.lock()?;
        store.last_id += 1;
        let entry = HabitEntry::new(HabitEntryId::new(store.last_id), *reading, recorded_at);
        store.entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<HabitEntry>, HabitEntryRepositoryError> {
        let store = self.lock()?;
        Ok(Self::newest_first(&store).cloned().collect())
    }

    async fn count(&self) -> Result<u64, HabitEntryRepositoryError> {
        let store = self.lock()?;
        Ok(store.entries.len() as u64)
    }

    async fn sample(&self, limit: usize) -> Result<EntrySample, HabitEntryRepositoryError> {
        let store = self.lock()?;
        Ok(EntrySample {
            total: store.entries.len() as u64,
            newest: Self::newest_first(&store).take(limit).cloned().collect(),
        })
    }
}
