//! Port abstraction for habit entry persistence adapters and their errors.
//!
//! The store is append-only: entries are inserted once and never updated or
//! deleted. Reads return entries newest first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{HabitEntry, HabitReading};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by habit entry repository adapters.
    pub enum HabitEntryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "habit entry repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "habit entry repository query failed: {message}",
    }
}

/// Store size and newest rows read from one consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySample {
    /// Total number of stored entries.
    pub total: u64,
    /// Up to `limit` entries in [`HabitEntryRepository::list_all`] order.
    pub newest: Vec<HabitEntry>,
}

/// Port for the durable habit entry store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitEntryRepository: Send + Sync {
    /// Persist a reading stamped with `recorded_at`, returning the stored
    /// entry with its assigned identifier.
    ///
    /// A failed insert must leave no row behind.
    async fn insert(
        &self,
        reading: &HabitReading,
        recorded_at: DateTime<Utc>,
    ) -> Result<HabitEntry, HabitEntryRepositoryError>;

    /// Every stored entry ordered by timestamp descending, then id
    /// descending.
    async fn list_all(&self) -> Result<Vec<HabitEntry>, HabitEntryRepositoryError>;

    /// Total number of stored entries.
    async fn count(&self) -> Result<u64, HabitEntryRepositoryError>;

    /// Entry count together with the `limit` newest entries.
    ///
    /// Both halves come from the same read, so `total` never disagrees with
    /// `newest` under concurrent inserts.
    async fn sample(&self, limit: usize) -> Result<EntrySample, HabitEntryRepositoryError>;
}
