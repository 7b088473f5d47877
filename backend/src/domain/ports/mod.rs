//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod chart_renderer;
mod diagnostics_query;
mod habit_chart_query;
mod habit_entry_command;
mod habit_entry_query;
mod habit_entry_repository;
mod predictive_model;

#[cfg(test)]
pub use chart_renderer::MockChartRenderer;
pub use chart_renderer::{ChartRenderError, ChartRenderer};
#[cfg(test)]
pub use diagnostics_query::MockDiagnosticsQuery;
pub use diagnostics_query::{DiagnosticsQuery, DiagnosticsSnapshot, HealthReport};
pub use habit_chart_query::HabitChartQuery;
#[cfg(test)]
pub use habit_chart_query::MockHabitChartQuery;
#[cfg(test)]
pub use habit_entry_command::MockHabitEntryCommand;
pub use habit_entry_command::{HabitEntryCommand, RecordedEntry};
pub use habit_entry_query::HabitEntryQuery;
#[cfg(test)]
pub use habit_entry_query::MockHabitEntryQuery;
#[cfg(test)]
pub use habit_entry_repository::MockHabitEntryRepository;
pub use habit_entry_repository::{EntrySample, HabitEntryRepository, HabitEntryRepositoryError};
pub use predictive_model::{NoPredictiveModel, PredictiveModelStatus};
