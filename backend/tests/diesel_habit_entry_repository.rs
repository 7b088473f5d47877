//! Integration tests for `DieselHabitEntryRepository` against embedded
//! PostgreSQL.
//!
//! Each test gets a freshly migrated database. Set `SKIP_TEST_CLUSTER=1` where
//! the cluster cannot start.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use habits_backend::domain::ports::{HabitEntryRepository, HabitEntryRepositoryError};
use habits_backend::domain::{HabitEntry, HabitReading};
use habits_backend::outbound::persistence::{DbPool, DieselHabitEntryRepository, PoolConfig};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::embedded_postgres::drop_entries_table;
use support::{handle_cluster_setup_failure, migrate_schema, reset_database};

const TEST_DB: &str = "habit_entry_repo_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    repository: DieselHabitEntryRepository,
    database_url: String,
}

impl TestContext {
    fn insert(&self, reading: HabitReading, at: DateTime<Utc>) -> HabitEntry {
        self.runtime
            .block_on(self.repository.insert(&reading, at))
            .expect("insert entry")
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    reset_database(&cluster, TEST_DB)?;
    let database_url = cluster.connection().database_url(TEST_DB);
    migrate_schema(&database_url)?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        repository: DieselHabitEntryRepository::new(pool),
        database_url,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn morning(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, day, 7, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn reading(mood: i32) -> HabitReading {
    HabitReading::new(7.5, 2.0, mood).expect("valid reading")
}

#[rstest]
fn inserted_entries_get_ids_and_keep_values(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: inserted_entries_get_ids_and_keep_values skipped");
        return;
    };

    let first = context.insert(reading(4), morning(1));
    let second = context.insert(reading(2), morning(2));

    assert!(second.id() > first.id());
    assert_eq!(first.reading(), &reading(4));
    assert_eq!(first.recorded_at(), morning(1));
}

#[rstest]
fn listing_is_newest_first_with_id_tiebreak(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: listing_is_newest_first_with_id_tiebreak skipped");
        return;
    };

    let old = context.insert(reading(1), morning(1));
    let tie_a = context.insert(reading(2), morning(3));
    let tie_b = context.insert(reading(3), morning(3));
    let middle = context.insert(reading(4), morning(2));

    let listed = context
        .runtime
        .block_on(context.repository.list_all())
        .expect("list entries");

    let ids: Vec<_> = listed.iter().map(HabitEntry::id).collect();
    assert_eq!(ids, vec![tie_b.id(), tie_a.id(), middle.id(), old.id()]);
}

#[rstest]
fn count_and_sample_track_inserts(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: count_and_sample_track_inserts skipped");
        return;
    };

    let start = morning(10);
    for day in 0..5 {
        context.insert(reading(3), start + TimeDelta::days(day));
    }

    let count = context
        .runtime
        .block_on(context.repository.count())
        .expect("count entries");
    let sample = context
        .runtime
        .block_on(context.repository.sample(3))
        .expect("sample entries");

    assert_eq!(count, 5);
    assert_eq!(sample.total, count);
    let stamps: Vec<_> = sample.newest.iter().map(HabitEntry::recorded_at).collect();
    assert_eq!(
        stamps,
        vec![
            start + TimeDelta::days(4),
            start + TimeDelta::days(3),
            start + TimeDelta::days(2),
        ]
    );
}

#[rstest]
fn missing_table_surfaces_query_errors(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: missing_table_surfaces_query_errors skipped");
        return;
    };

    drop_entries_table(&context.database_url).expect("drop table");

    let err = context
        .runtime
        .block_on(context.repository.insert(&reading(3), morning(1)))
        .expect_err("insert without a table");
    assert!(matches!(err, HabitEntryRepositoryError::Query { .. }));

    let err = context
        .runtime
        .block_on(context.repository.count())
        .expect_err("count without a table");
    assert!(matches!(err, HabitEntryRepositoryError::Query { .. }));
}
