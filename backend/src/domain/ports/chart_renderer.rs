//! Driven port for turning a numeric series into an encoded image.

use crate::domain::ChartPoint;

use super::define_port_error;

define_port_error! {
    /// Errors raised while drawing or encoding a chart.
    pub enum ChartRenderError {
        /// The plotting backend failed to draw.
        Drawing { message: String } => "chart drawing failed: {message}",
        /// The drawn frame could not be encoded.
        Encoding { message: String } => "chart encoding failed: {message}",
    }
}

/// Synchronous, side-effect-free chart renderer.
///
/// Implementations must produce a well-formed image for an empty series.
#[cfg_attr(test, mockall::automock)]
pub trait ChartRenderer: Send + Sync {
    /// Render `points` (chronological) as a line chart and return PNG bytes.
    fn render(
        &self,
        title: &str,
        y_label: &str,
        points: &[ChartPoint],
    ) -> Result<Vec<u8>, ChartRenderError>;
}
