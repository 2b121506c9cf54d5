use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::timeseries::calendar::business_day_grid;
use crate::{ChatcastError, PreparedSeries};

/// Default name of the timestamp column in source files.
pub const DEFAULT_TIME_COL: &str = "interval_et";

/// Default name of the value column in source files.
pub const DEFAULT_SERIES_COL: &str = "chats";

/// Timestamp formats accepted in the source timestamp column, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Options for [`prepare_series`].
#[derive(Debug, Clone)]
pub struct PrepOptions {
    /// Name of the source column holding interval timestamps.
    pub time_col: String,
    /// Name of the source column holding interval counts.
    pub series_col: String,
    /// Replace missing values with [`imputation_value`]. When disabled,
    /// missing slots stay unset and downstream consumers must tolerate gaps.
    pub impute: bool,
    /// Replace the value column with its natural logarithm. The caller is
    /// responsible for inverting this on anything read back from the model.
    pub log_transform: bool,
}

impl Default for PrepOptions {
    fn default() -> Self {
        Self {
            time_col: DEFAULT_TIME_COL.to_string(),
            series_col: DEFAULT_SERIES_COL.to_string(),
            impute: true,
            log_transform: true,
        }
    }
}

/// Sentinel used for missing values.
///
/// A small positive epsilon when a log transform follows, so the transform
/// never receives zero; plain zero otherwise.
#[must_use]
pub const fn imputation_value(log_transform: bool) -> f64 {
    if log_transform { 0.001 } else { 0.0 }
}

/// Load a CSV of interval observations and align it onto the complete
/// 15-minute business-day grid spanning the dates present in the file.
///
/// Every grid timestamp appears exactly once in the output, whether or not
/// the source had an observation there; observations that do not land on a
/// grid slot (off-cadence or weekend timestamps) are dropped by the join.
/// Missing slots are imputed per [`imputation_value`] when `opts.impute` is
/// set. With `opts.log_transform`, the value column is replaced by its
/// natural log; a non-positive value in the source is rejected outright
/// rather than silently producing `-inf`.
///
/// # Errors
/// - `Io` if the file cannot be opened.
/// - `Csv` if a record cannot be decoded.
/// - `InvalidArg` if a configured column is absent from the header.
/// - `Parse` if a timestamp or count cannot be parsed.
/// - `Data` if the file has no rows, a duplicate timestamp, or a
///   non-positive value under the log transform.
pub fn prepare_series(
    path: impl AsRef<Path>,
    opts: &PrepOptions,
) -> Result<PreparedSeries, ChatcastError> {
    let path = path.as_ref();
    let observations = read_observations(path, &opts.time_col, &opts.series_col)?;
    if observations.is_empty() {
        return Err(ChatcastError::data(format!(
            "{} contains no observations",
            path.display()
        )));
    }

    let (start, end) = date_span(&observations);
    let grid = business_day_grid(start, end);
    tracing::debug!(
        rows = observations.len(),
        grid = grid.len(),
        %start,
        %end,
        "aligning observations onto calendar grid"
    );

    let mut by_ts: HashMap<NaiveDateTime, Option<f64>> =
        HashMap::with_capacity(observations.len());
    for (ts, value) in observations {
        if by_ts.insert(ts, value).is_some() {
            return Err(ChatcastError::data(format!(
                "duplicate timestamp {ts} in {}",
                path.display()
            )));
        }
    }

    let mut y: Vec<Option<f64>> = Vec::with_capacity(grid.len());
    for ts in &grid {
        let observed = by_ts.get(ts).copied().flatten();
        match observed {
            Some(v) => y.push(Some(v)),
            None if opts.impute => y.push(Some(imputation_value(opts.log_transform))),
            None => y.push(None),
        }
    }

    if opts.log_transform {
        for (slot, ts) in y.iter_mut().zip(&grid) {
            if let Some(v) = *slot {
                if v <= 0.0 {
                    return Err(ChatcastError::data(format!(
                        "log transform requires positive values; got {v} at {ts}"
                    )));
                }
                *slot = Some(v.ln());
            }
        }
    }

    PreparedSeries::from_parts(grid, y)
}

/// Read `(timestamp, value)` records from a CSV file.
///
/// A record whose value field is empty is kept as a missing observation; the
/// grid join treats it like an absent row.
fn read_observations(
    path: &Path,
    time_col: &str,
    series_col: &str,
) -> Result<Vec<(NaiveDateTime, Option<f64>)>, ChatcastError> {
    let file = File::open(path).map_err(|e| ChatcastError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let time_idx = column_index(&headers, time_col)?;
    let series_idx = column_index(&headers, series_col)?;

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record?;
        let ts_raw = record.get(time_idx).unwrap_or_default().trim();
        let ts = parse_timestamp(time_col, ts_raw)?;
        let value_raw = record.get(series_idx).unwrap_or_default().trim();
        let value = if value_raw.is_empty() {
            None
        } else {
            Some(value_raw.parse::<f64>().map_err(|e| {
                ChatcastError::parse(series_col, value_raw, e.to_string())
            })?)
        };
        out.push((ts, value));
    }
    Ok(out)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, ChatcastError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ChatcastError::invalid_arg(format!("column `{name}` not found in header")))
}

fn parse_timestamp(column: &str, raw: &str) -> Result<NaiveDateTime, ChatcastError> {
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(ts);
        }
    }
    Err(ChatcastError::parse(
        column,
        raw,
        "not a recognized timestamp",
    ))
}

/// Minimum and maximum calendar date (not time-of-day) present in the
/// observations. Callers guarantee the slice is non-empty.
fn date_span(observations: &[(NaiveDateTime, Option<f64>)]) -> (NaiveDate, NaiveDate) {
    let mut min = observations[0].0.date();
    let mut max = min;
    for (ts, _) in observations {
        let d = ts.date();
        if d < min {
            min = d;
        }
        if d > max {
            max = d;
        }
    }
    (min, max)
}
