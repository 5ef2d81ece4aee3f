//! Resolved chart layout.
//!
//! `ChartSpec` is the bridge between the data pipeline and the renderer: all
//! bounds are computed here so drawing code stays a straight transcription of
//! the spec and is easy to test without a backend.

use chrono::NaiveDate;

use crate::domain::{ChartOptions, Series, TrendSeries};
use crate::error::AppError;
use crate::io::ingest::IngestedData;

/// Fraction of headroom added above the tallest value.
const Y_PADDING: f64 = 0.05;

/// Everything the SVG renderer needs, fully resolved.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub series: Vec<Series>,
    /// Trend lines, index-aligned with `series` (may be empty).
    pub trends: Vec<TrendSeries>,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    /// Upper y bound (lower bound is always 0).
    pub y_max: f64,
}

/// Compute plot bounds from the ingested data and trend lines.
///
/// The y domain starts at 0 and tops out at the largest finite sample value,
/// clamped to `options.y_cap` per value (so one spike does not flatten the
/// rest of the chart) and padded by 5%. A single-day dataset gets its x range
/// widened by one day on each side so the axis has nonzero extent.
pub fn build_chart_spec(
    ingest: &IngestedData,
    trends: &[TrendSeries],
    options: &ChartOptions,
) -> Result<ChartSpec, AppError> {
    let mut max_value: Option<f64> = None;
    for series in &ingest.series {
        if let Some(m) = series.max_finite() {
            max_value = Some(max_value.map_or(m, |a| a.max(m)));
        }
    }
    let Some(mut max_value) = max_value else {
        return Err(AppError::input("No finite values to chart"));
    };
    if let Some(cap) = options.y_cap {
        max_value = max_value.min(cap);
    }

    let y_max = if max_value > 0.0 {
        max_value * (1.0 + Y_PADDING)
    } else {
        // All-zero (or negative-capped) data still needs a visible axis.
        1.0
    };

    let mut first_day = ingest.stats.first_day;
    let mut last_day = ingest.stats.last_day;
    if first_day == last_day {
        first_day = first_day.pred_opt().unwrap_or(first_day);
        last_day = last_day.succ_opt().unwrap_or(last_day);
    }

    Ok(ChartSpec {
        series: ingest.series.clone(),
        trends: trends.to_vec(),
        first_day,
        last_day,
        y_max,
    })
}
