//! Pointwise error metrics for forecast evaluation.

use serde::Serialize;

use crate::ChatcastError;

/// Mean squared error over two parallel slices.
///
/// # Errors
/// Returns `InvalidArg` if the slices differ in length or are empty.
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64, ChatcastError> {
    check_pair(actual, predicted)?;
    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p) * (a - p))
        .sum();
    Ok(sum / actual.len() as f64)
}

/// Mean absolute error over two parallel slices.
///
/// # Errors
/// Returns `InvalidArg` if the slices differ in length or are empty.
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64, ChatcastError> {
    check_pair(actual, predicted)?;
    let sum: f64 = actual.iter().zip(predicted).map(|(a, p)| (a - p).abs()).sum();
    Ok(sum / actual.len() as f64)
}

fn check_pair(actual: &[f64], predicted: &[f64]) -> Result<(), ChatcastError> {
    if actual.len() != predicted.len() {
        return Err(ChatcastError::invalid_arg(format!(
            "metric input length mismatch: {} actuals vs {} predictions",
            actual.len(),
            predicted.len()
        )));
    }
    if actual.is_empty() {
        return Err(ChatcastError::invalid_arg(
            "metric input is empty".to_string(),
        ));
    }
    Ok(())
}

/// Evaluation summary persisted as `eval_metrics.json`.
///
/// The `test_nonzero_*` pair is computed on the subset of test rows whose
/// actual count is greater than zero, so imputed gaps do not dominate the
/// test error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalMetrics {
    pub train_mse: f64,
    pub train_mae: f64,
    pub test_mse: f64,
    pub test_mae: f64,
    pub test_nonzero_mse: f64,
    pub test_nonzero_mae: f64,
}
