//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::habit_entries;
use crate::domain::{HabitEntry, HabitEntryId, HabitReading};

/// Row struct for reading from the habit_entries table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = habit_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HabitEntryRow {
    pub id: i64,
    pub sleep_hours: f64,
    pub water_litres: f64,
    pub mood: i32,
    pub recorded_at: DateTime<Utc>,
}

impl From<HabitEntryRow> for HabitEntry {
    fn from(row: HabitEntryRow) -> Self {
        HabitEntry::new(
            HabitEntryId::new(row.id),
            HabitReading::from_stored(row.sleep_hours, row.water_litres, row.mood),
            row.recorded_at,
        )
    }
}

/// Insertable struct for new habit entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = habit_entries)]
pub(crate) struct NewHabitEntryRow {
    pub sleep_hours: f64,
    pub water_litres: f64,
    pub mood: i32,
    pub recorded_at: DateTime<Utc>,
}

impl NewHabitEntryRow {
    pub(crate) fn new(reading: &HabitReading, recorded_at: DateTime<Utc>) -> Self {
        Self {
            sleep_hours: reading.sleep_hours(),
            water_litres: reading.water_litres(),
            mood: reading.mood(),
            recorded_at,
        }
    }
}
