//! Synthetic demo history for fresh installations.
//!
//! Seeds one week of plausible daily entries so charts have something to
//! draw. Generation is deterministic for a given RNG seed and clock reading.

use std::sync::Arc;

use chrono::TimeDelta;
use mockable::Clock;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::domain::habit_entry_service::map_repository_error;
use crate::domain::ports::HabitEntryRepository;
use crate::domain::{Error, HabitReading};

/// Number of daily entries written by a seeding pass.
pub const DEMO_DAYS: i64 = 7;

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSeedOutcome {
    /// Demo entries were written.
    Applied { inserted: u64 },
    /// The store already held entries and was left untouched.
    AlreadyPopulated { existing: u64 },
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn demo_reading(rng: &mut SmallRng) -> Result<HabitReading, Error> {
    let sleep = one_decimal(rng.gen_range(6.0..=8.0));
    let water = one_decimal(rng.gen_range(1.5..=2.5));
    let mood = rng.gen_range(3..=5);
    HabitReading::new(sleep, water, mood).map_err(|err| Error::internal(err.to_string()))
}

/// Writes demo entries into an empty store.
pub struct DemoDataSeeder<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> DemoDataSeeder<R>
where
    R: HabitEntryRepository,
{
    /// Seeder writing through `repository`, stamped by `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Insert [`DEMO_DAYS`] daily entries ending now, oldest first.
    ///
    /// Does nothing when the store already holds any entry.
    pub async fn seed_if_empty(&self, rng_seed: u64) -> Result<DemoSeedOutcome, Error> {
        let existing = self
            .repository
            .count()
            .await
            .map_err(map_repository_error)?;
        if existing > 0 {
            info!(existing, "demo data skipped; store already populated");
            return Ok(DemoSeedOutcome::AlreadyPopulated { existing });
        }

        let mut rng = SmallRng::seed_from_u64(rng_seed);
        let now = self.clock.utc();
        let mut inserted = 0;
        for days_ago in (0..DEMO_DAYS).rev() {
            let reading = demo_reading(&mut rng)?;
            self.repository
                .insert(&reading, now - TimeDelta::days(days_ago))
                .await
                .map_err(map_repository_error)?;
            inserted += 1;
        }

        info!(inserted, "demo data seeded");
        Ok(DemoSeedOutcome::Applied { inserted })
    }
}
