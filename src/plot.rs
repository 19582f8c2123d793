//! SVG line charts of sweep series.
//!
//! One chart per series: critical index on x, the swept statistic on y, with
//! point markers and a grid. The y range is padded by 10% of the data
//! span so flat series still get a visible band.

use std::path::Path;

use plotters::prelude::*;

use crate::constants::CHART_SIZE;
use crate::error::OutputError;
use crate::simulation::SweepSeries;

/// Labels and color for one chart.
pub struct SeriesChart<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub color: RGBColor,
}

/// Render `series` as a line chart at `path` (SVG).
pub fn render_sweep_chart(
    path: &Path,
    series: &SweepSeries,
    chart: &SeriesChart<'_>,
) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    draw(path, series, chart).map_err(|e| OutputError::Plot {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw(
    path: &Path,
    series: &SweepSeries,
    chart: &SeriesChart<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = series.len().saturating_sub(1).max(1) as f64;
    let (y_lo, y_hi) = padded_range(&series.values);

    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, y_lo..y_hi)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .draw()?;

    ctx.draw_series(LineSeries::new(series.points(), &chart.color))?;
    ctx.draw_series(
        series
            .points()
            .map(|p| Circle::new(p, 3, chart.color.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Data range padded by 10% of the span (or of the magnitude when flat).
fn padded_range(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values.iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    let pad = if span > 1e-12 {
        0.1 * span
    } else {
        0.1 * hi.abs().max(1.0)
    };
    (lo - pad, hi + pad)
}
