//! CSV export of plot-ready series.
//!
//! The analysis pipeline's visualization boundary is a set of
//! `(x, y, title)` triples: time-domain plots pair time with amplitude,
//! spectrum plots pair frequency with magnitude or phase. This module writes
//! them as CSV so any external plotting tool can render them; nothing in the
//! pipeline depends on how (or whether) that happens.

use std::io::Write;
use std::path::Path;

/// One plot-ready data series.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    /// Human-readable title, written as a comment header.
    pub title: String,
    /// X axis values (time in seconds or frequency in Hz).
    pub x: Vec<f64>,
    /// Y axis values (amplitude, magnitude, or phase).
    pub y: Vec<f64>,
}

impl PlotSeries {
    /// Bundle a series from its parts.
    pub fn new(title: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            title: title.into(),
            x,
            y,
        }
    }
}

/// Write a series as CSV: a `#` title comment, an `x,y` header, one row per
/// sample.
///
/// # Errors
///
/// Fails when the series' axes disagree in length or the file cannot be
/// written.
pub fn write_series_csv(series: &PlotSeries, path: impl AsRef<Path>) -> anyhow::Result<()> {
    anyhow::ensure!(
        series.x.len() == series.y.len(),
        "series '{}' has mismatched axes: {} vs {}",
        series.title,
        series.x.len(),
        series.y.len()
    );

    let mut file = std::fs::File::create(path.as_ref())?;
    writeln!(file, "# {}", series.title)?;
    writeln!(file, "x,y")?;
    for (x, y) in series.x.iter().zip(series.y.iter()) {
        writeln!(file, "{x:.12},{y:.12}")?;
    }
    Ok(())
}

/// Turn a title into a safe file stem: lowercase alphanumerics with
/// underscores.
pub fn file_stem(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
