//! Chart rendering service.
//!
//! Loads the full habit history, projects one field into a chronological
//! series and hands it to the [`ChartRenderer`] port. Rendering is CPU-bound,
//! so it runs on the blocking thread pool.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::habit_entry_service::map_repository_error;
use crate::domain::ports::{ChartRenderer, HabitChartQuery, HabitEntryRepository};
use crate::domain::{ChartField, ChartImage, Error, chart_series};

/// Chart service implementing [`HabitChartQuery`].
#[derive(Clone)]
pub struct HabitChartService<R> {
    repository: Arc<R>,
    renderer: Arc<dyn ChartRenderer>,
}

impl<R> HabitChartService<R> {
    /// Create a new service with the given repository and renderer.
    pub fn new(repository: Arc<R>, renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            repository,
            renderer,
        }
    }
}

#[async_trait]
impl<R> HabitChartQuery for HabitChartService<R>
where
    R: HabitEntryRepository,
{
    async fn render_chart(&self, field: ChartField) -> Result<ChartImage, Error> {
        let entries = self
            .repository
            .list_all()
            .await
            .map_err(map_repository_error)?;
        let points = chart_series(field, &entries);
        debug!(%field, points = points.len(), "rendering habit chart");

        let renderer = Arc::clone(&self.renderer);
        let rendered = tokio::task::spawn_blocking(move || {
            renderer.render(field.title(), field.column(), &points)
        })
        .await
        .map_err(|err| {
            error!(error = %err, %field, "chart render task failed");
            Error::internal("chart render task failed")
        })?;

        rendered.map(ChartImage::new).map_err(|err| {
            error!(error = %err, %field, "chart rendering failed");
            Error::internal(err.to_string())
        })
    }
}
