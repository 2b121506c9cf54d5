//! Orchestration for the chatcast training/evaluation workflow.
//!
//! [`run`] is the whole pipeline: prepare the train and test series, fit the
//! forecaster, predict on both, invert the log transform, compute evaluation
//! metrics, and persist the run artifacts. It takes the forecaster through
//! the [`Forecaster`] seam so tests can drive it with a mock backend while
//! the binary uses the Prophet one.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chatcast_core::{
    ChatcastError, EvalMetrics, Forecast, Forecaster, PrepOptions, PreparedSeries, exp_counts,
    mean_absolute_error, mean_squared_error, prepare_series,
};
use clap::Parser;
use serde::Serialize;

/// Artifact: the parsed CLI arguments.
pub const ARGS_FILE: &str = "args.json";
/// Artifact: the six evaluation metrics.
pub const METRICS_FILE: &str = "eval_metrics.json";
/// Artifact: per-timestamp test predictions and actuals.
pub const PREDS_FILE: &str = "test_preds_actuals.csv";
/// Artifact: the serialized model snapshot.
pub const MODEL_FILE: &str = "model.json";

/// Command-line arguments: three positionals, no flags.
#[derive(Debug, Clone, Parser, Serialize)]
#[command(
    name = "chatcast",
    about = "Train and evaluate a time-series forecast of interval chat volumes."
)]
pub struct RunArgs {
    /// Experiment name; all artifacts are written to a directory named this.
    pub exp_name: String,
    /// Path to the training data CSV file.
    pub train_csv_path: PathBuf,
    /// Path to the test data CSV file.
    pub test_csv_path: PathBuf,
}

/// Execute the full workflow and persist artifacts under the experiment
/// directory.
///
/// The output directory must not already exist; a run never overwrites a
/// previous experiment. Artifacts are written only after fitting and
/// evaluation succeed.
///
/// # Errors
/// Propagates any preparation, backend, metric, or I/O failure. Every
/// failure is fatal; there is no partial-run recovery.
pub fn run(args: &RunArgs, forecaster: &mut dyn Forecaster) -> Result<EvalMetrics, ChatcastError> {
    let opts = PrepOptions::default();
    let train = prepare_series(&args.train_csv_path, &opts)?;
    let test = prepare_series(&args.test_csv_path, &opts)?;

    forecaster.fit(&train)?;

    // In-sample evaluation on the training grid.
    let train_forecast = forecaster.predict(train.ds())?;
    let train_predicted = counts_f64(&train_forecast.yhat);
    let train_actual = counts_f64(&train.dense_y()?);
    let train_mse = mean_squared_error(&train_actual, &train_predicted)?;
    let train_mae = mean_absolute_error(&train_actual, &train_predicted)?;
    tracing::info!(train_mse, train_mae, "training evaluation");

    // Out-of-sample evaluation, full and non-zero-actual subsets.
    let test_forecast = forecaster.predict(test.ds())?;
    let test_predicted = counts_f64(&test_forecast.yhat);
    let test_actual = counts_f64(&test.dense_y()?);
    let test_mse = mean_squared_error(&test_actual, &test_predicted)?;
    let test_mae = mean_absolute_error(&test_actual, &test_predicted)?;
    tracing::info!(test_mse, test_mae, "test evaluation");

    let (nonzero_actual, nonzero_predicted): (Vec<f64>, Vec<f64>) = test_actual
        .iter()
        .zip(&test_predicted)
        .filter(|(a, _)| **a > 0.0)
        .map(|(a, p)| (*a, *p))
        .unzip();
    let test_nonzero_mse = mean_squared_error(&nonzero_actual, &nonzero_predicted)?;
    let test_nonzero_mae = mean_absolute_error(&nonzero_actual, &nonzero_predicted)?;
    tracing::info!(test_nonzero_mse, test_nonzero_mae, "test evaluation (non-zero actuals)");

    let metrics = EvalMetrics {
        train_mse,
        train_mae,
        test_mse,
        test_mae,
        test_nonzero_mse,
        test_nonzero_mae,
    };

    persist_artifacts(args, forecaster, &metrics, &test, &test_forecast)?;
    Ok(metrics)
}

/// Invert the log transform and cast to counts, as f64 for the metrics.
fn counts_f64(log_values: &[f64]) -> Vec<f64> {
    exp_counts(log_values).into_iter().map(|c| c as f64).collect()
}

fn persist_artifacts(
    args: &RunArgs,
    forecaster: &dyn Forecaster,
    metrics: &EvalMetrics,
    test: &PreparedSeries,
    test_forecast: &Forecast,
) -> Result<(), ChatcastError> {
    let out_dir = PathBuf::from(&args.exp_name);
    // Refuses to clobber a previous experiment: create_dir fails if present.
    fs::create_dir(&out_dir).map_err(|e| ChatcastError::io(&out_dir, e))?;

    write_json(&out_dir.join(ARGS_FILE), args)?;
    write_json(&out_dir.join(METRICS_FILE), metrics)?;
    write_preds_csv(&out_dir.join(PREDS_FILE), test, test_forecast)?;
    write_json(&out_dir.join(MODEL_FILE), &forecaster.snapshot())?;
    tracing::info!(dir = %out_dir.display(), "artifacts written");
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ChatcastError> {
    let file = File::create(path).map_err(|e| ChatcastError::io(path, e))?;
    serde_json::to_writer_pretty(file, value)
        .map_err(|e| ChatcastError::data(format!("serializing {}: {e}", path.display())))
}

/// Write the per-timestamp predictions/actuals table: predicted point and
/// bounds as integer counts, the actual count, and the log-scale actual.
fn write_preds_csv(
    path: &Path,
    test: &PreparedSeries,
    forecast: &Forecast,
) -> Result<(), ChatcastError> {
    let logy = test.dense_y()?;
    let y = exp_counts(&logy);
    let yhat = exp_counts(&forecast.yhat);
    let yhat_lower = exp_counts(&forecast.yhat_lower);
    let yhat_upper = exp_counts(&forecast.yhat_upper);

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["ds", "yhat", "yhat_lower", "yhat_upper", "y", "logy"])?;
    for i in 0..test.len() {
        writer.write_record([
            test.ds()[i].format("%Y-%m-%d %H:%M:%S").to_string(),
            yhat[i].to_string(),
            yhat_lower[i].to_string(),
            yhat_upper[i].to_string(),
            y[i].to_string(),
            logy[i].to_string(),
        ])?;
    }
    writer.flush().map_err(|e| ChatcastError::io(path, e))
}
