//! Core building blocks for the chatcast forecasting workflow.
//!
//! Overview
//! - Generates the complete 15-minute business-day calendar grid for a date
//!   span (`timeseries::calendar`).
//! - Aligns raw interval observations onto that grid, imputes gaps, and
//!   applies the log transform expected by the model (`timeseries::prepare`).
//! - Defines the narrow [`Forecaster`] seam so preparation and evaluation are
//!   testable independent of any concrete forecasting backend.
//! - Computes the evaluation metrics persisted by a run (`metrics`).
//!
//! Key behaviors and trade-offs
//! - Prepared series use the fixed `ds`/`y` schema ([`DS_COL`]/[`Y_COL`])
//!   required by the downstream model consumer; the rename is a contract,
//!   not a convention.
//! - The imputation sentinel is coupled to the log-transform flag through
//!   [`timeseries::prepare::imputation_value`]: a small positive epsilon when
//!   a log follows, so the transform never receives zero.
//! - Applying the log transform to a non-positive source value is rejected
//!   with an explicit error rather than silently producing `-inf`.

/// Unified error type.
pub mod error;
/// Forecasting backend seam.
pub mod forecaster;
/// Evaluation metrics.
pub mod metrics;
/// Calendar grid and series preparation.
pub mod timeseries;
/// Series, forecast, and snapshot types.
pub mod types;

pub use error::ChatcastError;
pub use forecaster::{Forecaster, exp_counts};
pub use metrics::{EvalMetrics, mean_absolute_error, mean_squared_error};
pub use timeseries::calendar::{INTERVAL_MINUTES, business_day_grid, parse_span_date};
pub use timeseries::prepare::{
    DEFAULT_SERIES_COL, DEFAULT_TIME_COL, PrepOptions, imputation_value, prepare_series,
};
pub use types::{DS_COL, Forecast, ModelSnapshot, PreparedSeries, Y_COL};
