//! Driving port for reading habit history.

use async_trait::async_trait;

use crate::domain::{Error, HabitEntry};

/// Domain use-case port for listing stored entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitEntryQuery: Send + Sync {
    /// All entries, newest first.
    async fn list_entries(&self) -> Result<Vec<HabitEntry>, Error>;
}
