//! PNG rendering of a [`Histogram`] through the plotters bitmap backend.
//!
//! Only filled rectangles are drawn (no captions or tick labels), so the
//! output does not depend on any system font being installed.

use crate::histogram::Histogram;
use freqhist_common::{FreqHistError, RenderConfig, Result};
use plotters::prelude::*;
use std::path::Path;

fn output_error(path: &Path, e: impl std::fmt::Display) -> FreqHistError {
    FreqHistError::OutputWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

pub fn render_png(hist: &Histogram, output_path: &Path, cfg: &RenderConfig) -> Result<()> {
    if hist.counts.is_empty() {
        return Err(FreqHistError::DegenerateData("histogram has no bins".into()));
    }
    if cfg.width == 0 || cfg.height == 0 {
        return Err(output_error(output_path, format!("invalid canvas size {}x{}", cfg.width, cfg.height)));
    }

    let root = BitMapBackend::new(output_path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| output_error(output_path, e))?;

    // headroom above the tallest bar
    let y_max = (hist.max_count() as f64 * 1.05).max(1.0);
    let mut chart = ChartBuilder::on(&root)
        .margin(cfg.margin)
        .build_cartesian_2d(hist.range_start..hist.range_end(), 0.0..y_max)
        .map_err(|e| output_error(output_path, e))?;

    let [r, g, b] = cfg.bar_color;
    let bar_style = RGBColor(r, g, b).filled();
    chart
        .draw_series(
            hist.bins()
                .filter(|&(_, _, count)| count > 0)
                .map(|(start, end, count)| Rectangle::new([(start, 0.0), (end, count as f64)], bar_style)),
        )
        .map_err(|e| output_error(output_path, e))?;

    // x axis baseline
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(hist.range_start, 0.0), (hist.range_end(), 0.0)],
            BLACK.stroke_width(1),
        )))
        .map_err(|e| output_error(output_path, e))?;

    root.present().map_err(|e| output_error(output_path, e))?;
    Ok(())
}
