//! Export trend lines to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one `day` column plus one column per smoothed metric.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::TrendSeries;
use crate::error::AppError;

/// Format trend lines as CSV text.
///
/// All trends produced by one run share the same day axis (each smoothing
/// strategy is applied uniformly across series of equal length), so the first
/// trend's days drive the rows.
pub fn format_trends_csv(trends: &[TrendSeries]) -> Result<String, AppError> {
    let Some(first) = trends.first() else {
        return Err(AppError::input(
            "No trend values to export (smoothing 'none' produces no trends)",
        ));
    };

    for trend in trends {
        if trend.samples.len() != first.samples.len() {
            return Err(AppError::new(
                4,
                format!(
                    "Trend '{}' has {} values but '{}' has {}; misaligned trends cannot be exported",
                    trend.name,
                    trend.samples.len(),
                    first.name,
                    first.samples.len()
                ),
            ));
        }
    }

    let mut out = String::from("day");
    for trend in trends {
        out.push(',');
        out.push_str(&trend.name);
    }
    out.push('\n');

    for (row, sample) in first.samples.iter().enumerate() {
        out.push_str(&sample.day.format("%Y-%m-%d").to_string());
        for trend in trends {
            out.push_str(&format!(",{:.3}", trend.samples[row].value));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Write trend lines to a CSV file.
pub fn write_trends_csv(path: &Path, trends: &[TrendSeries]) -> Result<(), AppError> {
    let csv = format_trends_csv(trends)?;
    let mut file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    file.write_all(csv.as_bytes())
        .map_err(|e| AppError::input(format!("Failed to write export CSV '{}': {e}", path.display())))?;
    Ok(())
}
