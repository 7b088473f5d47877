//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/` (through
//! the `test-support` feature).

pub mod clock {
    //! Controllable clock for time-stamping tests.

    use std::sync::{Mutex, MutexGuard, PoisonError};

    use chrono::{DateTime, Local, TimeDelta, Utc};
    use mockable::Clock;

    /// Clock whose reading only moves when a test advances it.
    pub struct MutableClock(Mutex<DateTime<Utc>>);

    impl MutableClock {
        /// Clock frozen at `now`.
        pub fn new(now: DateTime<Utc>) -> Self {
            Self(Mutex::new(now))
        }

        /// Move the clock forward by `seconds`.
        pub fn advance_seconds(&self, seconds: i64) {
            *self.lock_clock() += TimeDelta::seconds(seconds);
        }

        fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl Clock for MutableClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.lock_clock()
        }
    }
}

pub mod repositories {
    //! Habit entry store doubles.

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    use crate::domain::ports::{EntrySample, HabitEntryRepository, HabitEntryRepositoryError};
    use crate::domain::{HabitEntry, HabitReading};

    /// Store that fails every call with the configured error.
    #[derive(Debug, Clone)]
    pub struct FailingHabitEntryRepository {
        error: HabitEntryRepositoryError,
    }

    impl FailingHabitEntryRepository {
        /// Store that fails with `error`.
        pub fn new(error: HabitEntryRepositoryError) -> Self {
            Self { error }
        }

        /// Store that behaves as if the database were down.
        pub fn unreachable() -> Self {
            Self::new(HabitEntryRepositoryError::connection(
                "connection refused",
            ))
        }
    }

    #[async_trait]
    impl HabitEntryRepository for FailingHabitEntryRepository {
        async fn insert(
            &self,
            _reading: &HabitReading,
            _recorded_at: DateTime<Utc>,
        ) -> Result<HabitEntry, HabitEntryRepositoryError> {
            Err(self.error.clone())
        }

        async fn list_all(&self) -> Result<Vec<HabitEntry>, HabitEntryRepositoryError> {
            Err(self.error.clone())
        }

        async fn count(&self) -> Result<u64, HabitEntryRepositoryError> {
            Err(self.error.clone())
        }

        async fn sample(&self, _limit: usize) -> Result<EntrySample, HabitEntryRepositoryError> {
            Err(self.error.clone())
        }
    }
}

pub mod static_site {
    //! Temporary static directories for landing page tests.

    use std::io;
    use std::path::Path;

    use cap_std::{ambient_authority, fs::Dir};
    use tempfile::TempDir;

    /// Create a temporary static directory containing `index.html`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use habits_backend::test_support::static_site::static_dir_with_index;
    ///
    /// let dir = static_dir_with_index("<h1>Habits</h1>")?;
    /// assert!(dir.path().join("index.html").exists());
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn static_dir_with_index(html: &str) -> io::Result<TempDir> {
        let temp = tempfile::tempdir()?;
        let directory = Dir::open_ambient_dir(temp.path(), ambient_authority())?;
        directory.write(Path::new("index.html"), html.as_bytes())?;
        Ok(temp)
    }
}

pub use clock::MutableClock;
pub use repositories::FailingHabitEntryRepository;
