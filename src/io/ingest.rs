//! Stats ingest and normalization.
//!
//! This module turns a daily-stats file (CSV or a JSON array of records) into
//! clean, per-metric `Series` that are safe to smooth and render.
//!
//! Design goals:
//! - **Strict schema** for the `day` column (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Normalized output**: stable ascending sort by day, duplicate days
//!   dropped (first occurrence wins), one sample per day per series
//! - **Separation of concerns**: no smoothing or layout logic here
//!
//! Numeric cells that are empty or unparseable become `NaN` samples rather
//! than hard errors; downstream smoothing propagates them and rendering skips
//! them.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::{Sample, Series};
use crate::error::AppError;

/// Date format accepted in the `day` field.
const DAY_FORMAT: &str = "%Y-%m-%d";

/// Suffix marking a column as a precomputed trend for its base metric.
const AVG_SUFFIX: &str = "_avg";

/// A row-level problem encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    /// 1-based source line (CSV) or record index (JSON).
    pub line: usize,
    pub message: String,
}

/// Summary stats about the days actually used.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub n_days: usize,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

/// Ingest output: normalized series + stats + row errors.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub series: Vec<Series>,
    pub stats: DatasetStats,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load and normalize a stats file, dispatching on the file extension
/// (`.json` reads a JSON array of records, everything else reads CSV).
pub fn load_series(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open input '{}': {e}", path.display())))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let result = if is_json {
        read_series_json(file)
    } else {
        read_series_csv(file)
    };

    result.map_err(|e| AppError::input(format!("{}: {e}", path.display())))
}

/// Read daily stats from CSV.
///
/// Schema: first column `day` (YYYY-MM-DD), remaining columns numeric
/// metrics. A column named `<metric>_avg` is attached to `<metric>` as its
/// precomputed trend instead of becoming a series of its own.
pub fn read_series_csv<R: Read>(reader: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    if !headers.iter().next().is_some_and(|h| h.eq_ignore_ascii_case("day")) {
        return Err(AppError::input("First CSV column must be 'day'"));
    }
    let columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    if columns.is_empty() {
        return Err(AppError::input("CSV has a 'day' column but no metric columns"));
    }

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0;

    for (idx, record) in reader.records().enumerate() {
        // Header occupies line 1.
        let line = idx + 2;
        rows_read += 1;

        let record = match record {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("Malformed CSV record: {e}"),
                });
                continue;
            }
        };

        let day_field = record.get(0).unwrap_or("");
        let day = match NaiveDate::parse_from_str(day_field, DAY_FORMAT) {
            Ok(d) => d,
            Err(_) => {
                row_errors.push(RowError {
                    line,
                    message: format!("Invalid day '{day_field}' (expected YYYY-MM-DD); row skipped"),
                });
                continue;
            }
        };

        let mut values = Vec::with_capacity(columns.len());
        for (col, name) in columns.iter().enumerate() {
            let field = record.get(col + 1).unwrap_or("");
            values.push(parse_metric(field, name, line, &mut row_errors));
        }
        rows.push(RawRow { line, day, values });
    }

    assemble(rows, columns, rows_read, row_errors)
}

/// Read daily stats from a JSON array of records.
///
/// Each record is an object with a `"day"` string plus numeric metric fields,
/// e.g. `[{"day": "2024-01-05", "hits": 120, "views": 340}, ...]`. Metric
/// fields missing from a record become `NaN` for that day.
pub fn read_series_json<R: Read>(reader: R) -> Result<IngestedData, AppError> {
    let records: Vec<serde_json::Map<String, Value>> = serde_json::from_reader(reader)
        .map_err(|e| AppError::input(format!("Invalid stats JSON: {e}")))?;

    // Metric set is the union over all records; serde_json keeps object keys
    // sorted, so the resulting column order is deterministic.
    let mut columns: Vec<String> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if key != "day" && !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    if columns.is_empty() {
        return Err(AppError::input("Stats JSON has no metric fields"));
    }

    let rows_read = records.len();
    let mut rows = Vec::new();
    let mut row_errors = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let line = idx + 1;

        let day_field = record.get("day").and_then(Value::as_str).unwrap_or("");
        let day = match NaiveDate::parse_from_str(day_field, DAY_FORMAT) {
            Ok(d) => d,
            Err(_) => {
                row_errors.push(RowError {
                    line,
                    message: format!(
                        "Record {line}: missing or invalid day '{day_field}' (expected YYYY-MM-DD); record skipped"
                    ),
                });
                continue;
            }
        };

        let mut values = Vec::with_capacity(columns.len());
        for name in &columns {
            values.push(json_metric(record.get(name), name, line, &mut row_errors));
        }
        rows.push(RawRow { line, day, values });
    }

    assemble(rows, columns, rows_read, row_errors)
}

struct RawRow {
    line: usize,
    day: NaiveDate,
    values: Vec<f64>,
}

fn parse_metric(field: &str, column: &str, line: usize, row_errors: &mut Vec<RowError>) -> f64 {
    if field.is_empty() {
        return f64::NAN;
    }
    match field.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            row_errors.push(RowError {
                line,
                message: format!("Non-numeric '{column}' value '{field}'; treated as NaN"),
            });
            f64::NAN
        }
    }
}

fn json_metric(value: Option<&Value>, column: &str, line: usize, row_errors: &mut Vec<RowError>) -> f64 {
    match value {
        None | Some(Value::Null) => f64::NAN,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => match s.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                row_errors.push(RowError {
                    line,
                    message: format!("Record {line}: non-numeric '{column}' value '{s}'; treated as NaN"),
                });
                f64::NAN
            }
        },
        Some(other) => {
            row_errors.push(RowError {
                line,
                message: format!("Record {line}: '{column}' is {other}; treated as NaN"),
            });
            f64::NAN
        }
    }
}

/// Sort, dedupe, and split raw rows into per-metric series.
fn assemble(
    mut rows: Vec<RawRow>,
    columns: Vec<String>,
    rows_read: usize,
    mut row_errors: Vec<RowError>,
) -> Result<IngestedData, AppError> {
    // Stable sort: rows with the same day keep their input order, so the
    // duplicate policy below ("first occurrence wins") is deterministic.
    rows.sort_by_key(|r| r.day);

    let mut deduped: Vec<RawRow> = Vec::with_capacity(rows.len());
    for row in rows {
        if deduped.last().is_some_and(|prev| prev.day == row.day) {
            row_errors.push(RowError {
                line: row.line,
                message: format!("Duplicate day {}; row skipped", row.day),
            });
        } else {
            deduped.push(row);
        }
    }

    if deduped.is_empty() {
        return Err(AppError::input("No usable rows in input"));
    }

    let stats = DatasetStats {
        n_days: deduped.len(),
        first_day: deduped[0].day,
        last_day: deduped[deduped.len() - 1].day,
    };

    let mut series = Vec::new();
    for (col, name) in columns.iter().enumerate() {
        if name.ends_with(AVG_SUFFIX) {
            continue;
        }

        let samples: Vec<Sample> = deduped
            .iter()
            .map(|r| Sample {
                day: r.day,
                value: r.values[col],
            })
            .collect();

        let avg_name = format!("{name}{AVG_SUFFIX}");
        let precomputed_trend = columns.iter().position(|c| *c == avg_name).map(|avg_col| {
            deduped
                .iter()
                .map(|r| Sample {
                    day: r.day,
                    value: r.values[avg_col],
                })
                .collect()
        });

        series.push(Series {
            name: name.clone(),
            samples,
            precomputed_trend,
        });
    }

    if series.is_empty() {
        return Err(AppError::input(
            "Input has only *_avg columns and no base metric columns",
        ));
    }

    let rows_used = deduped.len();
    Ok(IngestedData {
        series,
        stats,
        row_errors,
        rows_read,
        rows_used,
    })
}
