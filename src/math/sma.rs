//! Trailing simple moving average.
//!
//! Unweighted mean over the `window` most recent samples ending at each
//! index. The first `window - 1` indices have no full window, so the output
//! is shorter than the input: `len - window + 1` values.
//!
//! `window = 0` means "the whole sequence" and yields a single value (the
//! overall mean); `window > len` yields nothing.

use crate::domain::{Sample, TrendSeries};

/// Compute the trailing SMA of a value sequence.
pub fn trailing_sma(values: &[f64], window: usize) -> Vec<f64> {
    let window = if window == 0 { values.len() } else { window };
    if window == 0 || window > values.len() {
        return Vec::new();
    }

    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Build the trailing-SMA trend line for a named series.
///
/// Each output value is dated at the day its window ends on, so the trend
/// covers the last `len - window + 1` days of the series.
pub fn trailing_trend(name: &str, samples: &[Sample], window: usize) -> TrendSeries {
    let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
    let averaged = trailing_sma(&values, window);

    let skip = samples.len() - averaged.len();
    let samples = samples[skip..]
        .iter()
        .zip(averaged)
        .map(|(s, value)| Sample { day: s.day, value })
        .collect();

    TrendSeries {
        name: name.to_string(),
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn sma_concrete_windows() {
        // [1,2,3], [2,3,4], [3,4,5]
        assert_eq!(trailing_sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn sma_window_zero_means_whole_series() {
        assert_eq!(trailing_sma(&[1.0, 2.0, 3.0, 4.0], 0), vec![2.5]);
    }

    #[test]
    fn sma_window_equal_to_length() {
        assert_eq!(trailing_sma(&[2.0, 4.0], 2), vec![3.0]);
    }

    #[test]
    fn sma_window_longer_than_input_is_empty() {
        assert!(trailing_sma(&[1.0, 2.0], 3).is_empty());
        assert!(trailing_sma(&[], 0).is_empty());
    }

    #[test]
    fn trend_aligns_to_window_end_days() {
        let samples: Vec<Sample> = (1..=5)
            .map(|n| Sample {
                day: NaiveDate::from_ymd_opt(2024, 3, n).unwrap(),
                value: n as f64,
            })
            .collect();

        let trend = trailing_trend("hits", &samples, 3);
        assert_eq!(trend.samples.len(), 3);
        // First full window ends on day 3.
        assert_eq!(trend.samples[0].day, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
        assert_eq!(trend.samples[0].value, 2.0);
        assert_eq!(trend.samples[2].day, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(trend.samples[2].value, 4.0);
    }
}
