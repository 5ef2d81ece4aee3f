//! Centered triangular weighted moving average.
//!
//! For each index `i` the smoothed value is a weighted sum over the window
//! `[i - radius, i + radius]`, truncated at the sequence boundaries:
//!
//! ```text
//! weight(j)   = radius - |j - i|
//! smoothed(i) = Σ value(j) * weight(j) / max(Σ weight(j), 1)
//! ```
//!
//! Weights decay linearly from `radius` at the center; the offsets at
//! `|j - i| = radius` carry weight 0, so the effective window is one sample
//! narrower on each side than the nominal radius. Near the boundaries the
//! window is truncated, not padded: fewer terms contribute and the denominator
//! shrinks with them. The `max(denominator, 1)` guard keeps the division
//! defined for degenerate windows.
//!
//! Known degeneracy: at `radius = 0` the only in-window offset is the center,
//! whose weight is `0 - 0 = 0`, so every output is `0.0` rather than the
//! input value. This matches the historical formula; callers that want a
//! no-op should skip smoothing instead of passing radius 0.
//!
//! Non-finite inputs (`NaN`, infinities) propagate into every output whose
//! window touches them. This is a pure numeric transform; it does not defend
//! against malformed data.

use crate::domain::{Sample, TrendSeries};

/// Smooth a value sequence with a centered triangular window.
///
/// Returns one output per input, index-aligned.
pub fn triangular_smooth(values: &[f64], radius: usize) -> Vec<f64> {
    let n = values.len() as isize;
    let radius = radius as isize;

    let mut out = Vec::with_capacity(values.len());
    for i in 0..n {
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for j in (i - radius)..=(i + radius) {
            if j < 0 || j >= n {
                continue;
            }
            let weight = (radius - (j - i).abs()) as f64;
            numerator += values[j as usize] * weight;
            denominator += weight;
        }
        out.push(numerator / denominator.max(1.0));
    }
    out
}

/// Smooth a sample series, preserving days and ordering.
pub fn smooth_samples(samples: &[Sample], radius: usize) -> Vec<Sample> {
    let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
    let smoothed = triangular_smooth(&values, radius);

    samples
        .iter()
        .zip(smoothed)
        .map(|(s, value)| Sample { day: s.day, value })
        .collect()
}

/// Build the triangular trend line for a named series.
pub fn triangular_trend(name: &str, samples: &[Sample], radius: usize) -> TrendSeries {
    TrendSeries {
        name: name.to_string(),
        samples: smooth_samples(samples, radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    fn samples(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Sample {
                day: day(i as u32 + 1),
                value,
            })
            .collect()
    }

    #[test]
    fn smooth_preserves_length_and_days() {
        let input = samples(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        let out = smooth_samples(&input, 21);

        assert_eq!(out.len(), input.len());
        for (a, b) in input.iter().zip(out.iter()) {
            assert_eq!(a.day, b.day);
        }
    }

    #[test]
    fn smooth_center_point_concrete() {
        // weights for i=1, radius=1: 1, 2, 1 -> (10 + 40 + 30) / 4 = 20
        let out = triangular_smooth(&[10.0, 20.0, 30.0], 1);
        assert!((out[1] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn smooth_boundary_points_concrete() {
        // i=0, radius=1: in-bounds offsets 0 (weight 1) and +1 (weight 0)
        // -> 10*1 / 1 = 10. Mirrored at the right edge.
        let out = triangular_smooth(&[10.0, 20.0, 30.0], 1);
        assert!((out[0] - 10.0).abs() < 1e-12);
        assert!((out[2] - 30.0).abs() < 1e-12);
    }

    #[test]
    fn smooth_constant_series_is_fixed_point() {
        let out = triangular_smooth(&[7.5; 50], 21);
        for v in out {
            assert!((v - 7.5).abs() < 1e-9);
        }
    }

    #[test]
    fn smooth_radius_zero_degenerates_to_zero() {
        // The center weight is radius - 0 = 0, so numerator and denominator
        // are both 0 and the guard divides 0 by 1. Pinned, not "fixed".
        let out = triangular_smooth(&[1.0, 2.0, 3.0], 0);
        assert_eq!(out, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn smooth_nan_propagates() {
        let out = triangular_smooth(&[1.0, f64::NAN, 3.0, 4.0, 5.0], 2);
        // Every window touching index 1 turns NaN.
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert!(out[2].is_nan());
        // Index 4's window is [2..=6] truncated to [2, 4]; no NaN inside,
        // but index 3's window starts at 1.
        assert!(out[3].is_nan());
        assert!(out[4].is_finite());
    }

    #[test]
    fn smooth_empty_input() {
        assert!(triangular_smooth(&[], 21).is_empty());
    }
}
