use chrono::NaiveDateTime;
use serde::Serialize;

use crate::ChatcastError;

/// Name of the timestamp column in a prepared series.
///
/// Required by the downstream model consumer; every `Forecaster`
/// implementation receives series under this schema.
pub const DS_COL: &str = "ds";

/// Name of the value column in a prepared series.
///
/// Required by the downstream model consumer, alongside [`DS_COL`].
pub const Y_COL: &str = "y";

/// A series aligned to the business-day calendar grid, carrying one value
/// slot per grid timestamp.
///
/// Values are `None` where the source had no observation and imputation was
/// disabled. Timestamps are guaranteed strictly ascending and unique; the
/// constructor rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    ds: Vec<NaiveDateTime>,
    y: Vec<Option<f64>>,
}

impl PreparedSeries {
    /// Build a series from parallel timestamp/value vectors.
    ///
    /// # Errors
    /// - `Data` if the vectors differ in length.
    /// - `Data` if timestamps are not strictly ascending (covers duplicates).
    pub fn from_parts(
        ds: Vec<NaiveDateTime>,
        y: Vec<Option<f64>>,
    ) -> Result<Self, ChatcastError> {
        if ds.len() != y.len() {
            return Err(ChatcastError::data(format!(
                "timestamp/value length mismatch: {} vs {}",
                ds.len(),
                y.len()
            )));
        }
        for pair in ds.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ChatcastError::data(format!(
                    "timestamps not strictly ascending at {}",
                    pair[1]
                )));
            }
        }
        Ok(Self { ds, y })
    }

    /// Number of grid rows in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ds.len()
    }

    /// Whether the series has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ds.is_empty()
    }

    /// The calendar-grid timestamps, in ascending order.
    #[must_use]
    pub fn ds(&self) -> &[NaiveDateTime] {
        &self.ds
    }

    /// The value slots, parallel to [`ds`](Self::ds).
    #[must_use]
    pub fn y(&self) -> &[Option<f64>] {
        &self.y
    }

    /// Grid timestamps as UTC epoch seconds, the representation forecasting
    /// backends consume. Naive timestamps are interpreted as UTC.
    #[must_use]
    pub fn timestamps_utc(&self) -> Vec<i64> {
        self.ds.iter().map(|ts| ts.and_utc().timestamp()).collect()
    }

    /// The value column as a dense vector, for backends that cannot tolerate
    /// gaps.
    ///
    /// # Errors
    /// Returns `Data` naming the first gap timestamp if any slot is unset.
    /// Callers that disable imputation must pre-filter or tolerate this.
    pub fn dense_y(&self) -> Result<Vec<f64>, ChatcastError> {
        self.y
            .iter()
            .zip(&self.ds)
            .map(|(v, ts)| {
                v.ok_or_else(|| {
                    ChatcastError::data(format!("missing value at {ts} in a dense series"))
                })
            })
            .collect()
    }
}

/// Per-timestamp model output: a point estimate and lower/upper interval
/// bounds, on the same scale the model was trained on (log scale in this
/// workflow). The caller inverts the transform via
/// [`exp_counts`](crate::forecaster::exp_counts).
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Timestamps the forecast covers, ascending.
    pub ds: Vec<NaiveDateTime>,
    /// Point estimate per timestamp.
    pub yhat: Vec<f64>,
    /// Lower interval bound per timestamp.
    pub yhat_lower: Vec<f64>,
    /// Upper interval bound per timestamp.
    pub yhat_upper: Vec<f64>,
}

impl Forecast {
    /// Build a forecast, checking that all four columns are parallel.
    ///
    /// # Errors
    /// Returns `Data` on any length mismatch.
    pub fn new(
        ds: Vec<NaiveDateTime>,
        yhat: Vec<f64>,
        yhat_lower: Vec<f64>,
        yhat_upper: Vec<f64>,
    ) -> Result<Self, ChatcastError> {
        let n = ds.len();
        if yhat.len() != n || yhat_lower.len() != n || yhat_upper.len() != n {
            return Err(ChatcastError::data(format!(
                "forecast column length mismatch: ds={n}, yhat={}, lower={}, upper={}",
                yhat.len(),
                yhat_lower.len(),
                yhat_upper.len()
            )));
        }
        Ok(Self {
            ds,
            yhat,
            yhat_lower,
            yhat_upper,
        })
    }

    /// Number of forecast rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ds.len()
    }

    /// Whether the forecast has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ds.is_empty()
    }
}

/// Serializable description of a fitted model, persisted as the model
/// artifact of a run.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSnapshot {
    /// Backend name, e.g. `prophet`.
    pub backend: String,
    /// Whether `fit` has completed.
    pub fitted: bool,
    /// Number of training rows the model was fitted on.
    pub trained_rows: usize,
    /// Backend-specific configuration, as free-form JSON.
    pub options: serde_json::Value,
}
