//! Habit entry domain services.
//!
//! This module implements the driving ports for recording and listing habit
//! entries over a [`HabitEntryRepository`]. Timestamps come from the injected
//! clock so the server, not the client, decides when an entry was recorded.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info};

use crate::domain::ports::{
    HabitEntryCommand, HabitEntryQuery, HabitEntryRepository, HabitEntryRepositoryError,
    RecordedEntry,
};
use crate::domain::{Error, HabitEntry, HabitReading, feedback};

/// Map repository failures onto transport-agnostic domain errors.
pub(crate) fn map_repository_error(error: HabitEntryRepositoryError) -> Error {
    match error {
        HabitEntryRepositoryError::Connection { message } => Error::service_unavailable(message),
        HabitEntryRepositoryError::Query { message } => Error::internal(message),
    }
}

/// Habit entry service implementing the command and query ports.
#[derive(Clone)]
pub struct HabitEntryService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> HabitEntryService<R> {
    /// Create a new service with the given repository and clock.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R> HabitEntryCommand for HabitEntryService<R>
where
    R: HabitEntryRepository,
{
    async fn record_entry(&self, reading: HabitReading) -> Result<RecordedEntry, Error> {
        let recorded_at = self.clock.utc();
        let entry = self
            .repository
            .insert(&reading, recorded_at)
            .await
            .map_err(|err| {
                error!(error = ?err, "habit entry insert failed; transaction rolled back");
                map_repository_error(err)
            })?;

        info!(entry_id = %entry.id(), "habit entry recorded");
        Ok(RecordedEntry {
            feedback: feedback(entry.reading()),
            entry,
        })
    }
}

#[async_trait]
impl<R> HabitEntryQuery for HabitEntryService<R>
where
    R: HabitEntryRepository,
{
    async fn list_entries(&self) -> Result<Vec<HabitEntry>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "habit_entry_service_tests.rs"]
mod tests;
