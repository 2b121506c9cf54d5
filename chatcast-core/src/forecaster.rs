use chrono::NaiveDateTime;

use crate::{ChatcastError, Forecast, ModelSnapshot, PreparedSeries};

/// Narrow seam between series preparation and any forecasting backend.
///
/// Implementations receive a [`PreparedSeries`] under the fixed
/// [`DS_COL`](crate::DS_COL)/[`Y_COL`](crate::Y_COL) schema, already imputed
/// and log-transformed by the preparer. They own nothing about grid
/// construction or transforms; inverting the log scale is the caller's job.
pub trait Forecaster {
    /// Short backend name used in error tags and the model snapshot.
    fn name(&self) -> &'static str;

    /// Fit the model on a prepared training series.
    ///
    /// # Errors
    /// Returns `Data` if the series has gaps the backend cannot tolerate, or
    /// a `Backend`-tagged error if fitting fails.
    fn fit(&mut self, training: &PreparedSeries) -> Result<(), ChatcastError>;

    /// Predict at the given timestamps, on the training scale.
    ///
    /// # Errors
    /// Returns `InvalidArg` if called before [`fit`](Self::fit), or a
    /// `Backend`-tagged error if prediction fails.
    fn predict(&self, ds: &[NaiveDateTime]) -> Result<Forecast, ChatcastError>;

    /// Serializable description of the backend and its configuration.
    fn snapshot(&self) -> ModelSnapshot;
}

/// Invert the log transform on a slice of model-scale values and cast to
/// integer counts (nearest integer).
#[must_use]
pub fn exp_counts(log_values: &[f64]) -> Vec<i64> {
    log_values.iter().map(|v| v.exp().round() as i64).collect()
}

#[cfg(test)]
mod tests {
    use super::exp_counts;

    #[test]
    fn exp_counts_round_trips_positive_counts() {
        let counts = [1_i64, 7, 42, 1000];
        let logs: Vec<f64> = counts.iter().map(|&c| (c as f64).ln()).collect();
        assert_eq!(exp_counts(&logs), counts);
    }

    #[test]
    fn exp_counts_maps_imputation_epsilon_to_zero() {
        let logs = [0.001_f64.ln()];
        assert_eq!(exp_counts(&logs), vec![0]);
    }
}
