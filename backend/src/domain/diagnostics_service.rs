//! Health and debug diagnostics over the habit entry store.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::warn;

use crate::domain::Error;
use crate::domain::habit_entry_service::map_repository_error;
use crate::domain::ports::{
    DiagnosticsQuery, DiagnosticsSnapshot, HabitEntryRepository, HealthReport,
    PredictiveModelStatus,
};

/// Number of entries included in a diagnostics sample.
pub const DIAGNOSTICS_SAMPLE_SIZE: usize = 3;

/// Diagnostics service implementing [`DiagnosticsQuery`].
#[derive(Clone)]
pub struct DiagnosticsService<R> {
    repository: Arc<R>,
    model_status: Arc<dyn PredictiveModelStatus>,
    clock: Arc<dyn Clock>,
}

impl<R> DiagnosticsService<R> {
    /// Service reading through `repository`.
    pub fn new(
        repository: Arc<R>,
        model_status: Arc<dyn PredictiveModelStatus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            model_status,
            clock,
        }
    }
}

#[async_trait]
impl<R> DiagnosticsQuery for DiagnosticsService<R>
where
    R: HabitEntryRepository,
{
    async fn health(&self) -> Result<HealthReport, Error> {
        let entries_count = self.repository.count().await.map_err(|err| {
            warn!(error = %err, "habit entry store unreachable");
            map_repository_error(err)
        })?;
        Ok(HealthReport {
            entries_count,
            checked_at: self.clock.utc(),
        })
    }

    async fn snapshot(&self) -> Result<DiagnosticsSnapshot, Error> {
        let sample = self
            .repository
            .sample(DIAGNOSTICS_SAMPLE_SIZE)
            .await
            .map_err(map_repository_error)?;
        let model_loaded = self.model_status.is_model_loaded().await;
        Ok(DiagnosticsSnapshot {
            record_count: sample.total,
            model_loaded,
            sample: sample.newest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        EntrySample, HabitEntryRepositoryError, MockHabitEntryRepository, NoPredictiveModel,
    };
    use crate::domain::{ErrorCode, HabitEntry, HabitEntryId, HabitReading};
    use crate::test_support::MutableClock;
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct TrainedModel;

    #[async_trait]
    impl PredictiveModelStatus for TrainedModel {
        async fn is_model_loaded(&self) -> bool {
            true
        }
    }

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 10, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn service(
        repo: MockHabitEntryRepository,
        model: Arc<dyn PredictiveModelStatus>,
        now: DateTime<Utc>,
    ) -> DiagnosticsService<MockHabitEntryRepository> {
        DiagnosticsService::new(Arc::new(repo), model, Arc::new(MutableClock::new(now)))
    }

    #[rstest]
    #[tokio::test]
    async fn health_reports_count_and_clock_time(now: DateTime<Utc>) {
        let mut repo = MockHabitEntryRepository::new();
        repo.expect_count().times(1).return_once(|| Ok(0));

        let report = service(repo, Arc::new(NoPredictiveModel), now)
            .health()
            .await
            .expect("store reachable");

        assert_eq!(report.entries_count, 0);
        assert_eq!(report.checked_at, now);
    }

    #[rstest]
    #[tokio::test]
    async fn health_fails_when_store_unreachable(now: DateTime<Utc>) {
        let mut repo = MockHabitEntryRepository::new();
        repo.expect_count()
            .times(1)
            .return_once(|| Err(HabitEntryRepositoryError::connection("pool exhausted")));

        let err = service(repo, Arc::new(NoPredictiveModel), now)
            .health()
            .await
            .expect_err("unreachable store fails");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(err.message(), "pool exhausted");
    }

    #[rstest]
    #[tokio::test]
    async fn snapshot_takes_count_and_sample_from_one_read(now: DateTime<Utc>) {
        let sample: Vec<HabitEntry> = (1..=3)
            .rev()
            .map(|id| HabitEntry::new(HabitEntryId::new(id), HabitReading::from_stored(7.0, 2.0, 3), now))
            .collect();
        let expected = sample.clone();
        let mut repo = MockHabitEntryRepository::new();
        repo.expect_count().never();
        repo.expect_sample()
            .withf(|limit| *limit == DIAGNOSTICS_SAMPLE_SIZE)
            .times(1)
            .return_once(move |_| {
                Ok(EntrySample {
                    total: 5,
                    newest: sample,
                })
            });

        let snapshot = service(repo, Arc::new(TrainedModel), now)
            .snapshot()
            .await
            .expect("snapshot taken");

        assert_eq!(snapshot.record_count, 5);
        assert!(snapshot.model_loaded);
        assert_eq!(snapshot.sample, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn snapshot_propagates_query_faults(now: DateTime<Utc>) {
        let mut repo = MockHabitEntryRepository::new();
        repo.expect_sample()
            .times(1)
            .return_once(|_| Err(HabitEntryRepositoryError::query("syntax error")));

        let err = service(repo, Arc::new(NoPredictiveModel), now)
            .snapshot()
            .await
            .expect_err("query fault surfaces");

        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
