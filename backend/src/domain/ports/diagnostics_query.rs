//! Driving port for health and debug probes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Error, HabitEntry};

/// Store reachability report.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    /// Number of stored entries.
    pub entries_count: u64,
    /// When the store was queried.
    pub checked_at: DateTime<Utc>,
}

/// Internal diagnostic snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsSnapshot {
    /// Number of stored entries.
    pub record_count: u64,
    /// Whether a predictive model is loaded.
    pub model_loaded: bool,
    /// Most recent entries, newest first.
    pub sample: Vec<HabitEntry>,
}

/// Domain use-case port for health and debug probes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiagnosticsQuery: Send + Sync {
    /// Count stored entries; fails when the store is unreachable.
    async fn health(&self) -> Result<HealthReport, Error>;

    /// Record count, model status, and a small sample of recent rows.
    async fn snapshot(&self) -> Result<DiagnosticsSnapshot, Error>;
}
