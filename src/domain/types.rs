//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during smoothing and chart layout
//! - exported to CSV/JSON
//! - reloaded later for re-rendering or comparisons

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which trend-line smoothing to apply to each series.
///
/// The two computed strategies are deliberately distinct functions with
/// different edge semantics; see `math::smooth` and `math::sma`. Historical
/// report variants disagree on which one they use, so the choice is an
/// explicit knob rather than a heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SmoothingKind {
    /// Centered triangular weighted moving average (default radius 21).
    Triangular,
    /// Trailing unweighted moving average (shorter output).
    Trailing,
    /// Use `<metric>_avg` values shipped with the input verbatim.
    Precomputed,
    /// No trend lines.
    None,
}

impl SmoothingKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            SmoothingKind::Triangular => "triangular (centered)",
            SmoothingKind::Trailing => "trailing SMA",
            SmoothingKind::Precomputed => "precomputed",
            SmoothingKind::None => "none",
        }
    }
}

/// One daily observation of a metric.
///
/// Days are unique within a series and the series is sorted ascending by day
/// before any smoothing or rendering happens (ingest enforces both).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub day: NaiveDate,
    pub value: f64,
}

/// A named metric series (hits, views, downloads, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub samples: Vec<Sample>,
    /// Trend values shipped with the input (`<name>_avg` column), if any.
    pub precomputed_trend: Option<Vec<Sample>>,
}

impl Series {
    /// Largest finite sample value, if any value is finite.
    pub fn max_finite(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.value)
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}

/// A smoothed trend line derived from (or shipped alongside) a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSeries {
    pub name: String,
    pub samples: Vec<Sample>,
}

/// Render configuration for a chart.
///
/// This replaces the historical pattern of module-level `data`/`margin`/`svg`
/// globals: everything the renderer needs arrives as explicit parameters.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: Option<String>,
    /// Output size in SVG user units (pixels).
    pub width: u32,
    pub height: u32,
    pub smoothing: SmoothingKind,
    /// Window half-width for triangular smoothing.
    pub radius: usize,
    /// Window size for trailing SMA.
    pub window: usize,
    /// Clamp for the y-axis maximum (spike suppression).
    pub y_cap: Option<f64>,
    pub legend: bool,
    pub grid: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            width: 700,
            height: 300,
            smoothing: SmoothingKind::Triangular,
            radius: 21,
            window: 7,
            y_cap: None,
            legend: true,
            grid: true,
        }
    }
}
