//! Diesel table definitions for the PostgreSQL schema.
//!
//! Kept in step with `backend/migrations` by hand.

diesel::table! {
    /// Append-only daily habit entries.
    ///
    /// Rows are ordered by `recorded_at` descending, with `id` breaking ties.
    habit_entries (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        /// Hours slept.
        sleep_hours -> Float8,
        /// Litres of water drunk.
        water_litres -> Float8,
        /// Self-reported mood score.
        mood -> Int4,
        /// Server-assigned creation time.
        recorded_at -> Timestamptz,
    }
}
