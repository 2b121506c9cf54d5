//! Deterministic mock forecasting backend for tests and examples.
//!
//! Predicts the training mean at every requested timestamp, with a fixed
//! interval width around it. No randomness, no optimizer, no I/O, so
//! pipeline tests stay fast and reproducible.

use chatcast_core::{ChatcastError, Forecast, Forecaster, ModelSnapshot, PreparedSeries};
use chrono::NaiveDateTime;

/// Half-width of the mock prediction interval, on the training scale.
const INTERVAL_HALF_WIDTH: f64 = 0.25;

/// Mean-predicting [`Forecaster`] for tests.
#[derive(Debug, Default)]
pub struct MockForecaster {
    mean: Option<f64>,
    trained_rows: usize,
}

impl MockForecaster {
    /// Build an unfitted mock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The training mean, if fitted.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }
}

impl Forecaster for MockForecaster {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn fit(&mut self, training: &PreparedSeries) -> Result<(), ChatcastError> {
        let y = training.dense_y()?;
        if y.is_empty() {
            return Err(ChatcastError::data("cannot fit on an empty series"));
        }
        self.mean = Some(y.iter().sum::<f64>() / y.len() as f64);
        self.trained_rows = y.len();
        Ok(())
    }

    fn predict(&self, ds: &[NaiveDateTime]) -> Result<Forecast, ChatcastError> {
        let mean = self
            .mean
            .ok_or_else(|| ChatcastError::invalid_arg("predict called before fit"))?;
        Forecast::new(
            ds.to_vec(),
            vec![mean; ds.len()],
            vec![mean - INTERVAL_HALF_WIDTH; ds.len()],
            vec![mean + INTERVAL_HALF_WIDTH; ds.len()],
        )
    }

    fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            backend: "mock".to_string(),
            fitted: self.mean.is_some(),
            trained_rows: self.trained_rows,
            options: serde_json::json!({ "strategy": "training-mean" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> PreparedSeries {
        let base = NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let ds = (0..values.len())
            .map(|i| base + chrono::TimeDelta::minutes(15 * i as i64))
            .collect();
        PreparedSeries::from_parts(ds, values.iter().map(|&v| Some(v)).collect()).unwrap()
    }

    #[test]
    fn predicts_the_training_mean_everywhere() {
        let mut mock = MockForecaster::new();
        let training = series(&[1.0, 2.0, 3.0, 4.0]);
        mock.fit(&training).unwrap();

        let forecast = mock.predict(training.ds()).unwrap();
        assert_eq!(forecast.len(), 4);
        assert!(forecast.yhat.iter().all(|&v| v == 2.5));
        assert!(forecast.yhat_lower.iter().all(|&v| v == 2.25));
        assert!(forecast.yhat_upper.iter().all(|&v| v == 2.75));
    }

    #[test]
    fn predict_before_fit_is_rejected() {
        let mock = MockForecaster::new();
        let err = mock.predict(&[]).unwrap_err();
        assert!(matches!(err, ChatcastError::InvalidArg(_)));
    }
}
