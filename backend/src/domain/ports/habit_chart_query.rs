//! Driving port for rendering habit charts.

use async_trait::async_trait;

use crate::domain::{ChartField, ChartImage, Error};

/// Domain use-case port for charting one field over the full history.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitChartQuery: Send + Sync {
    /// Render the current history of `field`. Nothing is cached.
    async fn render_chart(&self, field: ChartField) -> Result<ChartImage, Error>;
}
