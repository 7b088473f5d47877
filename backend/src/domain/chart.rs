//! Chart selection and series types.
//!
//! Charts plot one numeric habit field against entry time. Only the three
//! fields listed by [`ChartField`] can be charted.

use std::fmt;

use chrono::{DateTime, Utc};

use super::habit_entry::HabitEntry;

/// Raised when a selector names no chartable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChartField(pub String);

impl fmt::Display for UnknownChartField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised chart field '{}'", self.0)
    }
}

impl std::error::Error for UnknownChartField {}

/// Habit field that can be rendered as a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartField {
    SleepHours,
    WaterLitres,
    Mood,
}

impl ChartField {
    /// Every chartable field, in route order.
    pub const ALL: [Self; 3] = [Self::SleepHours, Self::WaterLitres, Self::Mood];

    /// Resolve a route selector (`sleep`, `water`, `mood`).
    ///
    /// # Examples
    /// ```
    /// use habits_backend::domain::ChartField;
    ///
    /// assert_eq!(ChartField::from_selector("water"), Ok(ChartField::WaterLitres));
    /// assert!(ChartField::from_selector("steps").is_err());
    /// ```
    pub fn from_selector(selector: &str) -> Result<Self, UnknownChartField> {
        Self::ALL
            .into_iter()
            .find(|field| field.selector() == selector)
            .ok_or_else(|| UnknownChartField(selector.to_owned()))
    }

    /// Short route selector.
    pub fn selector(self) -> &'static str {
        match self {
            Self::SleepHours => "sleep",
            Self::WaterLitres => "water",
            Self::Mood => "mood",
        }
    }

    /// Stored column name.
    pub fn column(self) -> &'static str {
        match self {
            Self::SleepHours => "sleep_hours",
            Self::WaterLitres => "water_litres",
            Self::Mood => "mood",
        }
    }

    /// Chart caption.
    pub fn title(self) -> &'static str {
        match self {
            Self::SleepHours => "Sleep Hours Over Time",
            Self::WaterLitres => "Water Intake Over Time",
            Self::Mood => "Mood Over Time",
        }
    }

    /// Project the field's value out of an entry.
    pub fn value_of(self, entry: &HabitEntry) -> f64 {
        let reading = entry.reading();
        match self {
            Self::SleepHours => reading.sleep_hours(),
            Self::WaterLitres => reading.water_litres(),
            Self::Mood => f64::from(reading.mood()),
        }
    }
}

impl fmt::Display for ChartField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// One plotted sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub at: DateTime<Utc>,
    pub value: f64,
}

/// Build a chronological series for `field`.
///
/// Entries are expected in store order (newest first); ties on timestamp end
/// up oldest id first.
pub fn chart_series(field: ChartField, entries: &[HabitEntry]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = entries
        .iter()
        .rev()
        .map(|entry| ChartPoint {
            at: entry.recorded_at(),
            value: field.value_of(entry),
        })
        .collect();
    points.sort_by_key(|point| point.at);
    points
}

/// Encoded chart ready to stream to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    bytes: Vec<u8>,
}

impl ChartImage {
    /// MIME type of every rendered chart.
    pub const CONTENT_TYPE: &'static str = "image/png";

    /// Wrap encoded PNG bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Encoded PNG bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the encoded PNG bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HabitEntryId, HabitReading};
    use chrono::TimeZone;
    use rstest::rstest;

    fn entry(id: i64, hour: u32, mood: i32) -> HabitEntry {
        HabitEntry::new(
            HabitEntryId::new(id),
            HabitReading::from_stored(7.0, 2.0, mood),
            Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0)
                .single()
                .expect("valid timestamp"),
        )
    }

    #[rstest]
    #[case("sleep", ChartField::SleepHours, "Sleep Hours Over Time")]
    #[case("water", ChartField::WaterLitres, "Water Intake Over Time")]
    #[case("mood", ChartField::Mood, "Mood Over Time")]
    fn selectors_resolve_to_fields(
        #[case] selector: &str,
        #[case] expected: ChartField,
        #[case] title: &str,
    ) {
        let field = ChartField::from_selector(selector).expect("known selector");
        assert_eq!(field, expected);
        assert_eq!(field.title(), title);
        assert_eq!(field.selector(), selector);
    }

    #[rstest]
    #[case("steps")]
    #[case("")]
    #[case("Sleep")]
    #[case("sleep_hours")]
    fn unknown_selectors_are_rejected(#[case] selector: &str) {
        let err = ChartField::from_selector(selector).expect_err("unknown selector");
        assert_eq!(err, UnknownChartField(selector.to_owned()));
    }

    #[rstest]
    fn series_is_chronological_regardless_of_input_order() {
        let entries = vec![entry(3, 12, 5), entry(1, 8, 2), entry(2, 10, 3)];

        let series = chart_series(ChartField::Mood, &entries);

        let values: Vec<f64> = series.iter().map(|point| point.value).collect();
        assert_eq!(values, vec![2.0, 3.0, 5.0]);
        assert!(series.windows(2).all(|pair| pair[0].at <= pair[1].at));
    }

    #[rstest]
    fn empty_history_yields_empty_series() {
        assert!(chart_series(ChartField::SleepHours, &[]).is_empty());
    }
}
