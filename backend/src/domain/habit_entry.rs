//! Habit entry data model.
//!
//! A [`HabitReading`] is the validated user input for one day (sleep, water,
//! mood). A [`HabitEntry`] is a reading after the store has assigned its
//! surrogate key and the server has stamped its creation time. Entries are
//! immutable once written.

use std::fmt;

use chrono::{DateTime, Utc};

/// Upper bound for plausible sleep per entry.
pub const SLEEP_HOURS_MAX: f64 = 24.0;
/// Upper bound for plausible water intake per entry.
pub const WATER_LITRES_MAX: f64 = 20.0;

/// Validation errors returned by [`HabitReading::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum HabitReadingValidationError {
    /// Sleep was negative, non-finite or above [`SLEEP_HOURS_MAX`].
    SleepHoursOutOfRange { value: f64 },
    /// Water was negative, non-finite or above [`WATER_LITRES_MAX`].
    WaterLitresOutOfRange { value: f64 },
}

impl HabitReadingValidationError {
    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::SleepHoursOutOfRange { .. } => "sleep_hours",
            Self::WaterLitresOutOfRange { .. } => "water_litres",
        }
    }

    /// Rejected value.
    pub fn value(&self) -> f64 {
        match self {
            Self::SleepHoursOutOfRange { value } | Self::WaterLitresOutOfRange { value } => *value,
        }
    }
}

impl fmt::Display for HabitReadingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SleepHoursOutOfRange { .. } => {
                write!(f, "sleep_hours must be between 0 and {SLEEP_HOURS_MAX}")
            }
            Self::WaterLitresOutOfRange { .. } => {
                write!(f, "water_litres must be between 0 and {WATER_LITRES_MAX}")
            }
        }
    }
}

impl std::error::Error for HabitReadingValidationError {}

/// Validated daily habit values.
///
/// ## Invariants
/// - `sleep_hours` is finite and within `0..=24`.
/// - `water_litres` is finite and within `0..=20`.
/// - `mood` is any integer; the usual scale is 1–5 but it is not enforced.
///
/// # Examples
/// ```
/// use habits_backend::domain::HabitReading;
///
/// let reading = HabitReading::new(7.5, 2.0, 4).expect("valid reading");
/// assert_eq!(reading.mood(), 4);
/// assert!(HabitReading::new(25.0, 2.0, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitReading {
    sleep_hours: f64,
    water_litres: f64,
    mood: i32,
}

fn within(value: f64, max: f64) -> bool {
    value.is_finite() && (0.0..=max).contains(&value)
}

impl HabitReading {
    /// Validate and construct a reading.
    pub fn new(
        sleep_hours: f64,
        water_litres: f64,
        mood: i32,
    ) -> Result<Self, HabitReadingValidationError> {
        if !within(sleep_hours, SLEEP_HOURS_MAX) {
            return Err(HabitReadingValidationError::SleepHoursOutOfRange { value: sleep_hours });
        }
        if !within(water_litres, WATER_LITRES_MAX) {
            return Err(HabitReadingValidationError::WaterLitresOutOfRange {
                value: water_litres,
            });
        }
        Ok(Self {
            sleep_hours,
            water_litres,
            mood,
        })
    }

    /// Rebuild a reading from stored values without re-validating.
    ///
    /// Persistence adapters use this for rows that were validated on the way
    /// in.
    pub fn from_stored(sleep_hours: f64, water_litres: f64, mood: i32) -> Self {
        Self {
            sleep_hours,
            water_litres,
            mood,
        }
    }

    /// Hours slept.
    pub fn sleep_hours(&self) -> f64 {
        self.sleep_hours
    }

    /// Litres of water drunk.
    pub fn water_litres(&self) -> f64 {
        self.water_litres
    }

    /// Self-reported mood score.
    pub fn mood(&self) -> i32 {
        self.mood
    }
}

/// Store-assigned surrogate key for a habit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HabitEntryId(i64);

impl HabitEntryId {
    /// Wrap a store-assigned key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw key value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for HabitEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted habit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HabitEntry {
    id: HabitEntryId,
    reading: HabitReading,
    recorded_at: DateTime<Utc>,
}

impl HabitEntry {
    /// Assemble a stored entry.
    pub fn new(id: HabitEntryId, reading: HabitReading, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id,
            reading,
            recorded_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> HabitEntryId {
        self.id
    }

    /// Submitted values.
    pub fn reading(&self) -> &HabitReading {
        &self.reading
    }

    /// Server-assigned creation time; the sole ordering key.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Column names exposed by diagnostics, in storage order.
pub const HABIT_ENTRY_COLUMNS: [&str; 5] =
    ["id", "sleep_hours", "water_litres", "mood", "timestamp"];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0, 1)]
    #[case(24.0, 20.0, 5)]
    #[case(7.5, 2.0, -3)]
    #[case(8.0, 2.5, 42)]
    fn accepts_values_within_physical_bounds(
        #[case] sleep: f64,
        #[case] water: f64,
        #[case] mood: i32,
    ) {
        let reading = HabitReading::new(sleep, water, mood).expect("reading within bounds");
        assert_eq!(reading.sleep_hours(), sleep);
        assert_eq!(reading.water_litres(), water);
        assert_eq!(reading.mood(), mood);
    }

    #[rstest]
    #[case(-0.5, "sleep_hours")]
    #[case(24.5, "sleep_hours")]
    #[case(f64::NAN, "sleep_hours")]
    #[case(f64::INFINITY, "sleep_hours")]
    fn rejects_implausible_sleep(#[case] sleep: f64, #[case] field: &str) {
        let err = HabitReading::new(sleep, 2.0, 3).expect_err("sleep out of range");
        assert_eq!(err.field(), field);
        assert!(err.to_string().contains("sleep_hours"));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(20.5)]
    #[case(f64::NEG_INFINITY)]
    fn rejects_implausible_water(#[case] water: f64) {
        let err = HabitReading::new(7.0, water, 3).expect_err("water out of range");
        assert_eq!(err.field(), "water_litres");
    }

    #[rstest]
    fn rejected_value_is_reported() {
        let err = HabitReading::new(30.0, 2.0, 3).expect_err("sleep out of range");
        assert_eq!(err.value(), 30.0);
    }
}
