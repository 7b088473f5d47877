//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::{DiagnosticsQuery, HabitChartQuery, HabitEntryCommand, HabitEntryQuery};

/// Parameter object bundling the port implementations used by handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub entries: Arc<dyn HabitEntryCommand>,
    pub entries_query: Arc<dyn HabitEntryQuery>,
    pub charts: Arc<dyn HabitChartQuery>,
    pub diagnostics: Arc<dyn DiagnosticsQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub entries: Arc<dyn HabitEntryCommand>,
    pub entries_query: Arc<dyn HabitEntryQuery>,
    pub charts: Arc<dyn HabitChartQuery>,
    pub diagnostics: Arc<dyn DiagnosticsQuery>,
    static_dir: PathBuf,
}

impl HttpState {
    /// Construct state from ports and the directory holding `index.html`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use habits_backend::domain::ports::NoPredictiveModel;
    /// use habits_backend::domain::{DiagnosticsService, HabitChartService, HabitEntryService};
    /// use habits_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use habits_backend::outbound::chart::PlottersChartRenderer;
    /// use habits_backend::outbound::memory::InMemoryHabitEntryRepository;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(InMemoryHabitEntryRepository::default());
    /// let clock = Arc::new(DefaultClock);
    /// let entries = Arc::new(HabitEntryService::new(store.clone(), clock.clone()));
    /// let state = HttpState::new(
    ///     HttpStatePorts {
    ///         entries: entries.clone(),
    ///         entries_query: entries,
    ///         charts: Arc::new(HabitChartService::new(
    ///             store.clone(),
    ///             Arc::new(PlottersChartRenderer::new(clock.clone())),
    ///         )),
    ///         diagnostics: Arc::new(DiagnosticsService::new(
    ///             store,
    ///             Arc::new(NoPredictiveModel),
    ///             clock,
    ///         )),
    ///     },
    ///     "static",
    /// );
    /// assert!(state.static_dir().ends_with("static"));
    /// ```
    pub fn new(ports: HttpStatePorts, static_dir: impl Into<PathBuf>) -> Self {
        let HttpStatePorts {
            entries,
            entries_query,
            charts,
            diagnostics,
        } = ports;
        Self {
            entries,
            entries_query,
            charts,
            diagnostics,
            static_dir: static_dir.into(),
        }
    }

    /// Directory holding the landing page.
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
