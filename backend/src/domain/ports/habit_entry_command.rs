//! Driving port for recording habit entries.

use async_trait::async_trait;

use crate::domain::{Error, HabitEntry, HabitReading};

/// Result of recording an entry: the stored row and its feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEntry {
    pub entry: HabitEntry,
    pub feedback: String,
}

/// Domain use-case port for submitting a daily reading.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitEntryCommand: Send + Sync {
    /// Persist a reading and derive feedback for it.
    async fn record_entry(&self, reading: HabitReading) -> Result<RecordedEntry, Error>;
}
