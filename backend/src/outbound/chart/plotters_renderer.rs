//! `plotters`-backed implementation of the [`ChartRenderer`] port.
//!
//! Draws into an in-memory RGB buffer and encodes it as PNG with `image`.
//! The x axis is epoch seconds, labelled as UTC dates. Text uses a bundled
//! DejaVu Sans face registered with plotters on first render.

use std::fmt::Display;
use std::ops::Range;
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, TimeDelta, Utc};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use mockable::Clock;
use plotters::prelude::*;
use plotters::style::register_font;

use crate::domain::ChartPoint;
use crate::domain::ports::{ChartRenderError, ChartRenderer};

/// Rendered image width in pixels.
pub const CHART_WIDTH: u32 = 800;
/// Rendered image height in pixels.
pub const CHART_HEIGHT: u32 = 400;

const EMPTY_WINDOW_SECS: i64 = 24 * 60 * 60;
const SINGLE_POINT_PAD_SECS: f64 = 12.0 * 60.0 * 60.0;
const FLAT_SERIES_PAD: f64 = 1.0;
const LINE_COLOUR: RGBColor = RGBColor(31, 119, 180);

const FONT_FAMILY: &str = "sans-serif";
static FONT_BYTES: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");
static FONT_REGISTRATION: OnceLock<Result<(), String>> = OnceLock::new();

fn ensure_font() -> Result<(), ChartRenderError> {
    FONT_REGISTRATION
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
                .map_err(|_| "bundled font rejected".to_owned())
        })
        .clone()
        .map_err(ChartRenderError::drawing)
}

fn drawing_error<E: Display>(err: E) -> ChartRenderError {
    ChartRenderError::drawing(err.to_string())
}

fn seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp() as f64
}

fn date_label(value: &f64) -> String {
    DateTime::<Utc>::from_timestamp(*value as i64, 0)
        .map(|at| at.format("%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn padded(range: Range<f64>, pad: f64) -> Range<f64> {
    if range.end > range.start {
        range
    } else {
        (range.start - pad)..(range.end + pad)
    }
}

/// Line chart renderer with point markers.
#[derive(Clone)]
pub struct PlottersChartRenderer {
    clock: Arc<dyn Clock>,
}

impl PlottersChartRenderer {
    /// The clock anchors the default window drawn for an empty series.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    fn axis_ranges(&self, points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
        if points.is_empty() {
            let now = self.clock.utc();
            return (seconds(now - TimeDelta::seconds(EMPTY_WINDOW_SECS))..seconds(now), 0.0..1.0);
        }

        let (mut x_min, mut x_max) = (f64::MAX, f64::MIN);
        let (mut y_min, mut y_max) = (f64::MAX, f64::MIN);
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        let y_margin = (y_max - y_min) * 0.05;
        (
            padded(x_min..x_max, SINGLE_POINT_PAD_SECS),
            padded((y_min - y_margin)..(y_max + y_margin), FLAT_SERIES_PAD),
        )
    }

    fn draw(
        &self,
        buffer: &mut [u8],
        title: &str,
        y_label: &str,
        points: &[(f64, f64)],
    ) -> Result<(), ChartRenderError> {
        let (x_range, y_range) = self.axis_ranges(points);
        let root = BitMapBackend::with_buffer(buffer, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT_FAMILY, 24).into_font())
            .margin(16)
            .x_label_area_size(40)
            .y_label_area_size(56)
            .build_cartesian_2d(x_range, y_range)
            .map_err(drawing_error)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc(y_label)
            .x_labels(6)
            .x_label_formatter(&date_label)
            .draw()
            .map_err(drawing_error)?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &LINE_COLOUR))
            .map_err(drawing_error)?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 3, LINE_COLOUR.filled())),
            )
            .map_err(drawing_error)?;

        root.present().map_err(drawing_error)
    }
}

impl ChartRenderer for PlottersChartRenderer {
    fn render(
        &self,
        title: &str,
        y_label: &str,
        points: &[ChartPoint],
    ) -> Result<Vec<u8>, ChartRenderError> {
        ensure_font()?;
        let series: Vec<(f64, f64)> = points
            .iter()
            .filter(|point| point.value.is_finite())
            .map(|point| (seconds(point.at), point.value))
            .collect();

        let mut buffer = vec![0_u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
        self.draw(&mut buffer, title, y_label, &series)?;

        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(&buffer, CHART_WIDTH, CHART_HEIGHT, ExtendedColorType::Rgb8)
            .map_err(|err| ChartRenderError::encoding(err.to_string()))?;
        Ok(png)
    }
}
