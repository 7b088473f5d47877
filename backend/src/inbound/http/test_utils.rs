//! Test helpers for inbound HTTP components.

use std::path::Path;
use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use mockable::DefaultClock;

use crate::Trace;
use crate::domain::ports::{
    ChartRenderError, ChartRenderer, DiagnosticsQuery, HabitChartQuery, HabitEntryRepository,
    NoPredictiveModel,
};
use crate::domain::{ChartPoint, DiagnosticsService, HabitChartService, HabitEntryService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::{json_config, query_config, routes};
use crate::outbound::memory::InMemoryHabitEntryRepository;

/// Bytes returned by [`FixedChartRenderer`].
pub const FIXED_CHART: &[u8] = b"\x89PNG-test";

/// Renderer double that skips drawing.
pub struct FixedChartRenderer;

impl ChartRenderer for FixedChartRenderer {
    fn render(
        &self,
        _title: &str,
        _y_label: &str,
        _points: &[ChartPoint],
    ) -> Result<Vec<u8>, ChartRenderError> {
        Ok(FIXED_CHART.to_vec())
    }
}

/// Ports wired over `repository` with real services.
pub fn ports_over<R>(repository: Arc<R>) -> HttpStatePorts
where
    R: HabitEntryRepository + 'static,
{
    let clock = Arc::new(DefaultClock);
    let entries = Arc::new(HabitEntryService::new(repository.clone(), clock.clone()));
    HttpStatePorts {
        entries: entries.clone(),
        entries_query: entries,
        charts: Arc::new(HabitChartService::new(
            repository.clone(),
            Arc::new(FixedChartRenderer),
        )),
        diagnostics: Arc::new(DiagnosticsService::new(
            repository,
            Arc::new(NoPredictiveModel),
            clock,
        )),
    }
}

/// State over a fresh in-memory store.
pub fn memory_state() -> HttpState {
    HttpState::new(
        ports_over(Arc::new(InMemoryHabitEntryRepository::default())),
        "static",
    )
}

/// State over an arbitrary repository, usually a failing double.
pub fn state_over<R>(repository: R) -> HttpState
where
    R: HabitEntryRepository + 'static,
{
    HttpState::new(ports_over(Arc::new(repository)), "static")
}

/// State whose chart port is `charts`.
pub fn state_with_charts(charts: impl HabitChartQuery + 'static) -> HttpState {
    let mut ports = ports_over(Arc::new(InMemoryHabitEntryRepository::default()));
    ports.charts = Arc::new(charts);
    HttpState::new(ports, "static")
}

/// State whose diagnostics port is `diagnostics`.
pub fn state_with_diagnostics(diagnostics: impl DiagnosticsQuery + 'static) -> HttpState {
    let mut ports = ports_over(Arc::new(InMemoryHabitEntryRepository::default()));
    ports.diagnostics = Arc::new(diagnostics);
    HttpState::new(ports, "static")
}

/// State serving the landing page from `dir`.
pub fn state_with_static_dir(dir: &Path) -> HttpState {
    HttpState::new(
        ports_over(Arc::new(InMemoryHabitEntryRepository::default())),
        dir,
    )
}

/// Send one request through an app carrying every habit route.
pub async fn call(state: HttpState, request: TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .app_data(query_config())
            .wrap(Trace)
            .configure(routes),
    )
    .await;
    test::call_service(&app, request.to_request()).await
}
