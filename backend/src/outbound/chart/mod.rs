//! Chart rendering adapters.

mod plotters_renderer;

pub use plotters_renderer::{CHART_HEIGHT, CHART_WIDTH, PlottersChartRenderer};
