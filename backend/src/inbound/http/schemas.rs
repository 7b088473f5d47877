//! Wire representations shared by several endpoints.
//!
//! Domain types stay framework-agnostic; these structs carry the serde and
//! OpenAPI concerns.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::HabitEntry;

/// One stored habit entry as returned by `/entries` and `/debug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HabitEntryResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 7.5)]
    pub sleep_hours: f64,
    #[schema(example = 2.0)]
    pub water_litres: f64,
    #[schema(example = 4)]
    pub mood: i32,
    /// Creation time in RFC 3339.
    #[schema(example = "2026-05-04T07:30:00+00:00")]
    pub timestamp: String,
}

impl From<&HabitEntry> for HabitEntryResponse {
    fn from(entry: &HabitEntry) -> Self {
        let reading = entry.reading();
        Self {
            id: entry.id().as_i64(),
            sleep_hours: reading.sleep_hours(),
            water_litres: reading.water_litres(),
            mood: reading.mood(),
            timestamp: entry.recorded_at().to_rfc3339(),
        }
    }
}
