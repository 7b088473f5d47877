//! Builders for HTTP state over the configured habit entry store.

use std::path::Path;
use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{error, warn};

use habits_backend::domain::ports::{HabitEntryRepository, NoPredictiveModel};
use habits_backend::domain::{
    DemoDataSeeder, DiagnosticsService, HabitChartService, HabitEntryService,
};
use habits_backend::inbound::http::state::{HttpState, HttpStatePorts};
use habits_backend::outbound::chart::PlottersChartRenderer;
use habits_backend::outbound::memory::InMemoryHabitEntryRepository;
use habits_backend::outbound::persistence::DieselHabitEntryRepository;

use super::ServerConfig;

/// Wire every port over one repository instance.
fn ports_over<R>(repository: Arc<R>, clock: Arc<dyn Clock>) -> HttpStatePorts
where
    R: HabitEntryRepository + 'static,
{
    let entries = Arc::new(HabitEntryService::new(repository.clone(), clock.clone()));
    let renderer = Arc::new(PlottersChartRenderer::new(clock.clone()));
    HttpStatePorts {
        entries: entries.clone(),
        entries_query: entries,
        charts: Arc::new(HabitChartService::new(repository.clone(), renderer)),
        diagnostics: Arc::new(DiagnosticsService::new(
            repository,
            Arc::new(NoPredictiveModel),
            clock,
        )),
    }
}

/// Seed demo data into an empty store. Failures are logged; the server still
/// starts.
async fn seed_demo_data<R>(repository: Arc<R>, clock: Arc<dyn Clock>)
where
    R: HabitEntryRepository,
{
    let seeder = DemoDataSeeder::new(repository, clock);
    if let Err(err) = seeder.seed_if_empty(rand::random()).await {
        error!(error = %err, "demo data seeding failed");
    }
}

async fn state_over<R>(
    repository: Arc<R>,
    static_dir: &Path,
    seed: bool,
) -> web::Data<HttpState>
where
    R: HabitEntryRepository + 'static,
{
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    if seed {
        seed_demo_data(repository.clone(), clock.clone()).await;
    }
    web::Data::new(HttpState::new(ports_over(repository, clock), static_dir))
}

/// Build handler state: PostgreSQL-backed with a pool, in-memory otherwise.
pub(super) async fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    if let Some(pool) = &config.db_pool {
        let repository = Arc::new(DieselHabitEntryRepository::new(pool.clone()));
        state_over(repository, config.static_dir(), config.seed_demo_data).await
    } else {
        warn!("no database configured; entries are kept in memory and lost on restart");
        let repository = Arc::new(InMemoryHabitEntryRepository::default());
        state_over(repository, config.static_dir(), config.seed_demo_data).await
    }
}
