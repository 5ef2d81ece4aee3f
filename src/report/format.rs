//! Terminal output formatting.

use crate::io::ingest::{IngestedData, RowError};
use crate::report::summarize_series;

/// Format the dataset summary (day range + per-series stats + row problems).
pub fn format_summary(ingest: &IngestedData) -> String {
    let mut out = String::new();

    out.push_str("=== trafficchart - Daily Stats Summary ===\n");
    out.push_str(&format!(
        "Days: n={} | {} .. {}\n",
        ingest.stats.n_days, ingest.stats.first_day, ingest.stats.last_day
    ));
    out.push_str(&format!(
        "Rows: read={} used={}\n",
        ingest.rows_read, ingest.rows_used
    ));

    out.push_str("\nSeries:\n");
    for series in &ingest.series {
        let s = summarize_series(series);
        let trend_note = if s.has_precomputed_trend {
            " [precomputed avg]"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<12} n={} total={:.0} mean={:.1} min={:.0} max={:.0}{}\n",
            s.name, s.n_finite, s.total, s.mean, s.min, s.max, trend_note
        ));
    }

    if !ingest.row_errors.is_empty() {
        out.push('\n');
        out.push_str(&format_row_errors(&ingest.row_errors));
    }

    out
}

/// Format collected row-level ingest problems, one per line.
pub fn format_row_errors(row_errors: &[RowError]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Row problems ({}):\n", row_errors.len()));
    for err in row_errors {
        out.push_str(&format!("  line {}: {}\n", err.line, err.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::read_series_csv;

    #[test]
    fn summary_lists_each_series() {
        let csv = "day,hits,views\n\
                   2024-01-01,10,1\n\
                   2024-01-02,20,3\n";
        let ingest = read_series_csv(csv.as_bytes()).unwrap();
        let summary = format_summary(&ingest);

        assert!(summary.contains("Days: n=2 | 2024-01-01 .. 2024-01-02"));
        assert!(summary.contains("hits"));
        assert!(summary.contains("views"));
        assert!(summary.contains("total=30"));
        assert!(!summary.contains("Row problems"));
    }

    #[test]
    fn summary_includes_row_problems() {
        let csv = "day,hits\n\
                   2024-01-01,1\n\
                   bogus,2\n";
        let ingest = read_series_csv(csv.as_bytes()).unwrap();
        let summary = format_summary(&ingest);
        assert!(summary.contains("Row problems (1):"));
        assert!(summary.contains("line 3"));
    }
}
