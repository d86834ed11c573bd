//! Drawing of the two-panel distribution figure.
//!
//! The figure is rendered with [`plotters`] into an in-memory RGB buffer so it can be
//! shown in a window without touching the filesystem. Left panel: arrival time against
//! event index. Right panel: histogram of interarrival times.

use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::{
    config::HISTOGRAM_BINS,
    engine::histogram::{Histogram, observed_range},
    models::distribution::Distribution,
};

/// Errors that can occur while rendering the figure
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid figure size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

type Result<T> = core::result::Result<T, PlotError>;

const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);
const LABEL_FONT: (&str, u32) = ("sans-serif", 14);

/// A rendered figure: `width * height` pixels, three bytes (RGB) each, row-major.
#[derive(Debug, Clone)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Render both panels of `distribution` into a new RGB buffer.
pub fn render_figure(distribution: &Distribution, width: u32, height: u32) -> Result<Figure> {
    if width < 2 || height == 0 {
        return Err(PlotError::InvalidSize { width, height });
    }

    let histogram = Histogram::from_values(&distribution.interarrival, HISTOGRAM_BINS);
    let arrival_range = plottable_range(observed_range(&distribution.arrival), "arrival")?;
    let interarrival_range = plottable_range(histogram.range.clone(), "interarrival")?;
    let mut pixels = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let panels = root.split_evenly((1, 2));
        draw_arrival_panel(&panels[0], &distribution.arrival, arrival_range)?;
        draw_interarrival_panel(&panels[1], &histogram, interarrival_range)?;

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    log::debug!(
        "Rendered {}x{} figure: {} arrivals, histogram range {:?}",
        width,
        height,
        distribution.len(),
        histogram.range
    );

    Ok(Figure {
        width,
        height,
        pixels,
    })
}

/// X range of the arrival panel: index `0..len-1`, at least one unit wide.
pub fn index_range(len: usize) -> Range<f64> {
    0.0..(len.max(2) - 1) as f64
}

/// Axis range for a chart; plotters cannot lay out an axis whose span overflows `f64`.
fn plottable_range(range: Range<f64>, axis: &str) -> Result<Range<f64>> {
    if (range.end - range.start).is_finite() {
        Ok(range)
    } else {
        Err(PlotError::ChartConfig(format!(
            "{} values span {:e}..{:e}, too wide to plot",
            axis, range.start, range.end
        )))
    }
}

/// Points of the arrival line; non-finite values are dropped.
pub fn arrival_points(arrival: &[f64]) -> Vec<(f64, f64)> {
    arrival
        .iter()
        .enumerate()
        .filter(|(_, y)| y.is_finite())
        .map(|(i, &y)| (i as f64, y))
        .collect()
}

fn draw_arrival_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    arrival: &[f64],
    y_range: Range<f64>,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption("Arrival Time", CAPTION_FONT)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(index_range(arrival.len()), y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Index")
        .y_desc("Arrival time")
        .label_style(LABEL_FONT)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(arrival_points(arrival), &BLUE))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn draw_interarrival_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    histogram: &Histogram,
    x_range: Range<f64>,
) -> Result<()> {
    let y_end = histogram.max_count().max(1) as f64 * 1.05;

    let mut chart = ChartBuilder::on(area)
        .caption("Interarrival Time", CAPTION_FONT)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0.0..y_end)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Interarrival time")
        .y_desc("Count")
        .label_style(LABEL_FONT)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            histogram
                .edges()
                .zip(&histogram.counts)
                .map(|((left, right), &count)| {
                    Rectangle::new([(left, 0.0), (right, count as f64)], BLUE.mix(0.6).filled())
                }),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
