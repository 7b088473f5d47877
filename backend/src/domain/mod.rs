//! Domain primitives, services and ports.
//!
//! Purpose: Define the habit tracking model and the use-cases that operate
//! on it, independent of HTTP and storage. Adapters reach the domain only
//! through the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure type.
//! - HabitReading / HabitEntry: validated input and persisted entity.
//! - feedback: per-entry textual feedback.
//! - ChartField / ChartPoint / ChartImage: chart selection and output.
//! - HabitEntryService, HabitChartService, DiagnosticsService: port
//!   implementations wired by the server.

pub mod chart;
pub mod demo_data;
pub mod diagnostics_service;
pub mod error;
pub mod feedback;
pub mod habit_chart_service;
pub mod habit_entry;
pub mod habit_entry_service;
pub mod ports;

pub use self::chart::{ChartField, ChartImage, ChartPoint, UnknownChartField, chart_series};
pub use self::demo_data::{DEMO_DAYS, DemoDataSeeder, DemoSeedOutcome};
pub use self::diagnostics_service::{DIAGNOSTICS_SAMPLE_SIZE, DiagnosticsService};
pub use self::error::{Error, ErrorCode};
pub use self::feedback::{HydrationLevel, MoodLevel, SleepLevel, feedback};
pub use self::habit_chart_service::HabitChartService;
pub use self::habit_entry::{
    HABIT_ENTRY_COLUMNS, HabitEntry, HabitEntryId, HabitReading, HabitReadingValidationError,
};
pub use self::habit_entry_service::HabitEntryService;

