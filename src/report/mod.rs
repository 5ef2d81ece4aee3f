//! Reporting utilities: per-series summaries and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/ingest code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;

use crate::domain::Series;

/// Summary statistics over the finite values of one series.
#[derive(Debug, Clone)]
pub struct SeriesSummary {
    pub name: String,
    /// Count of finite samples (NaN gaps excluded).
    pub n_finite: usize,
    pub total: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub has_precomputed_trend: bool,
}

/// Compute summary statistics for a series, ignoring NaN gaps.
pub fn summarize_series(series: &Series) -> SeriesSummary {
    let mut n_finite = 0usize;
    let mut total = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for sample in &series.samples {
        if !sample.value.is_finite() {
            continue;
        }
        n_finite += 1;
        total += sample.value;
        min = min.min(sample.value);
        max = max.max(sample.value);
    }

    let (mean, min, max) = if n_finite > 0 {
        (total / n_finite as f64, min, max)
    } else {
        (f64::NAN, f64::NAN, f64::NAN)
    };

    SeriesSummary {
        name: series.name.clone(),
        n_finite,
        total,
        mean,
        min,
        max,
        has_precomputed_trend: series.precomputed_trend.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sample;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> Series {
        Series {
            name: "hits".to_string(),
            samples: values
                .iter()
                .enumerate()
                .map(|(i, &value)| Sample {
                    day: NaiveDate::from_ymd_opt(2024, 1, i as u32 + 1).unwrap(),
                    value,
                })
                .collect(),
            precomputed_trend: None,
        }
    }

    #[test]
    fn summary_ignores_nan_gaps() {
        let s = summarize_series(&series(&[10.0, f64::NAN, 20.0]));
        assert_eq!(s.n_finite, 2);
        assert_eq!(s.total, 30.0);
        assert_eq!(s.mean, 15.0);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 20.0);
    }

    #[test]
    fn summary_of_all_nan_series() {
        let s = summarize_series(&series(&[f64::NAN, f64::NAN]));
        assert_eq!(s.n_finite, 0);
        assert!(s.mean.is_nan());
    }
}
