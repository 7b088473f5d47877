//! Textual feedback derived from a single habit reading.
//!
//! Each dimension is bucketed against fixed thresholds and contributes one
//! sentence. The generator is total over every well-typed input: values
//! outside the usual scale fall into the nearest bucket.

use super::habit_entry::HabitReading;

/// Sleep below this many hours is considered low.
pub const SLEEP_LOW_BELOW: f64 = 6.0;
/// Sleep above this many hours is considered high.
pub const SLEEP_HIGH_ABOVE: f64 = 9.0;
/// Water intake below this many litres is considered low.
pub const WATER_LOW_BELOW: f64 = 1.5;
/// Water intake above this many litres is considered high.
pub const WATER_HIGH_ABOVE: f64 = 3.5;
/// Mood at or below this score is considered low.
pub const MOOD_LOW_AT_MOST: i32 = 2;
/// Mood at or above this score is considered good.
pub const MOOD_GOOD_AT_LEAST: i32 = 4;

/// Sleep bucket for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepLevel {
    /// Under [`SLEEP_LOW_BELOW`] hours.
    Low,
    /// Between the low and high thresholds, inclusive.
    Adequate,
    /// Over [`SLEEP_HIGH_ABOVE`] hours.
    High,
}

/// Water intake bucket for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationLevel {
    /// Under [`WATER_LOW_BELOW`] litres.
    Low,
    /// Between the low and high thresholds, inclusive.
    Adequate,
    /// Over [`WATER_HIGH_ABOVE`] litres.
    High,
}

/// Mood bucket for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodLevel {
    /// At most [`MOOD_LOW_AT_MOST`].
    Low,
    /// Between low and good.
    Neutral,
    /// At least [`MOOD_GOOD_AT_LEAST`].
    Good,
}

impl SleepLevel {
    /// Bucket a sleep duration. NaN is treated as low.
    pub fn classify(hours: f64) -> Self {
        if hours > SLEEP_HIGH_ABOVE {
            Self::High
        } else if hours >= SLEEP_LOW_BELOW {
            Self::Adequate
        } else {
            Self::Low
        }
    }

    fn sentence(self) -> &'static str {
        match self {
            Self::Low => "You slept less than recommended; aim for at least 7 hours tonight.",
            Self::Adequate => "Your sleep is in a healthy range.",
            Self::High => "You slept longer than usual; oversleeping can leave you groggy.",
        }
    }
}

impl HydrationLevel {
    /// Bucket a water intake. NaN is treated as low.
    pub fn classify(litres: f64) -> Self {
        if litres > WATER_HIGH_ABOVE {
            Self::High
        } else if litres >= WATER_LOW_BELOW {
            Self::Adequate
        } else {
            Self::Low
        }
    }

    fn sentence(self) -> &'static str {
        match self {
            Self::Low => "Try to drink more water throughout the day.",
            Self::Adequate => "Nice work staying hydrated.",
            Self::High => "That is a lot of water; there is no need to push past your thirst.",
        }
    }
}

impl MoodLevel {
    /// Bucket a mood score.
    ///
    /// # Examples
    /// ```
    /// use habits_backend::domain::MoodLevel;
    ///
    /// assert_eq!(MoodLevel::classify(3), MoodLevel::Neutral);
    /// assert_eq!(MoodLevel::classify(-7), MoodLevel::Low);
    /// ```
    pub fn classify(mood: i32) -> Self {
        if mood >= MOOD_GOOD_AT_LEAST {
            Self::Good
        } else if mood <= MOOD_LOW_AT_MOST {
            Self::Low
        } else {
            Self::Neutral
        }
    }

    fn sentence(self) -> &'static str {
        match self {
            Self::Low => "Sorry you are feeling low; a short walk or a chat with a friend may help.",
            Self::Neutral => "Your mood is steady today.",
            Self::Good => "Great to see you in a good mood!",
        }
    }
}

/// Compose the feedback message for a reading.
///
/// # Examples
/// ```
/// use habits_backend::domain::{HabitReading, feedback};
///
/// let reading = HabitReading::new(7.5, 2.0, 4).expect("valid reading");
/// let message = feedback(&reading);
/// assert!(message.contains("healthy range"));
/// assert_eq!(message, feedback(&reading));
/// ```
pub fn feedback(reading: &HabitReading) -> String {
    [
        SleepLevel::classify(reading.sleep_hours()).sentence(),
        HydrationLevel::classify(reading.water_litres()).sentence(),
        MoodLevel::classify(reading.mood()).sentence(),
    ]
    .join(" ")
}
