//! Shared load-and-smooth pipeline used by the `render` and `smooth` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! ingest -> normalize -> trend computation
//!
//! The commands then focus on presentation (SVG vs CSV vs terminal text).

use std::path::Path;

use crate::domain::{ChartOptions, SmoothingKind, TrendSeries};
use crate::error::AppError;
use crate::io::ingest::{self, IngestedData};
use crate::math;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    /// Trend lines, index-aligned with `ingest.series` (empty when smoothing
    /// is `none`).
    pub trends: Vec<TrendSeries>,
}

/// Load a stats file and compute trend lines per the configured strategy.
pub fn run(input: &Path, options: &ChartOptions) -> Result<RunOutput, AppError> {
    let ingest = ingest::load_series(input)?;
    let trends = compute_trends(&ingest, options)?;
    Ok(RunOutput { ingest, trends })
}

/// Compute one trend line per series.
///
/// The strategy is always explicit: historical reports disagree on which
/// smoother they use, so nothing here guesses based on the data.
pub fn compute_trends(
    ingest: &IngestedData,
    options: &ChartOptions,
) -> Result<Vec<TrendSeries>, AppError> {
    match options.smoothing {
        SmoothingKind::None => Ok(Vec::new()),
        SmoothingKind::Triangular => Ok(ingest
            .series
            .iter()
            .map(|s| math::triangular_trend(&s.name, &s.samples, options.radius))
            .collect()),
        SmoothingKind::Trailing => Ok(ingest
            .series
            .iter()
            .map(|s| math::trailing_trend(&s.name, &s.samples, options.window))
            .collect()),
        SmoothingKind::Precomputed => ingest
            .series
            .iter()
            .map(|s| {
                let samples = s.precomputed_trend.clone().ok_or_else(|| {
                    AppError::input(format!(
                        "Series '{0}' has no '{0}_avg' values; use --smoothing triangular to compute a trend",
                        s.name
                    ))
                })?;
                Ok(TrendSeries {
                    name: s.name.clone(),
                    samples,
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::read_series_csv;

    fn ingest(csv: &str) -> IngestedData {
        read_series_csv(csv.as_bytes()).unwrap()
    }

    fn options(smoothing: SmoothingKind) -> ChartOptions {
        ChartOptions {
            smoothing,
            radius: 1,
            window: 2,
            ..ChartOptions::default()
        }
    }

    #[test]
    fn none_produces_no_trends() {
        let data = ingest("day,hits\n2024-01-01,1\n2024-01-02,2\n");
        let trends = compute_trends(&data, &options(SmoothingKind::None)).unwrap();
        assert!(trends.is_empty());
    }

    #[test]
    fn triangular_trend_per_series_aligned_by_day() {
        let data = ingest(
            "day,hits,views\n\
             2024-01-01,10,1\n\
             2024-01-02,20,2\n\
             2024-01-03,30,3\n",
        );
        let trends = compute_trends(&data, &options(SmoothingKind::Triangular)).unwrap();

        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].name, "hits");
        assert_eq!(trends[0].samples.len(), 3);
        assert_eq!(trends[0].samples[1].day, data.series[0].samples[1].day);
        // weights 1,2,1 over [10,20,30] -> 80/4
        assert!((trends[0].samples[1].value - 20.0).abs() < 1e-12);
    }

    #[test]
    fn trailing_trend_is_shorter() {
        let data = ingest(
            "day,hits\n\
             2024-01-01,1\n\
             2024-01-02,2\n\
             2024-01-03,3\n",
        );
        let trends = compute_trends(&data, &options(SmoothingKind::Trailing)).unwrap();
        assert_eq!(trends[0].samples.len(), 2);
        assert_eq!(trends[0].samples[0].value, 1.5);
    }

    #[test]
    fn precomputed_requires_avg_column() {
        let with_avg = ingest("day,hits,hits_avg\n2024-01-01,10,12\n");
        let trends = compute_trends(&with_avg, &options(SmoothingKind::Precomputed)).unwrap();
        assert_eq!(trends[0].samples[0].value, 12.0);

        let without = ingest("day,hits\n2024-01-01,10\n");
        let err = compute_trends(&without, &options(SmoothingKind::Precomputed)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
