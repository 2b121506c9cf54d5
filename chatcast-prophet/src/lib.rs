//! Prophet forecasting backend for the chatcast workflow.
//!
//! Wraps `augurs::prophet` with the WASM Stan optimizer behind the
//! [`Forecaster`] seam. The model configuration is fixed: linear growth,
//! daily and weekly seasonality on, yearly off, full changepoint range,
//! additive seasonality, and the US federal holiday calendar.

use augurs::prophet::{
    FeatureMode, GrowthType, PositiveFloat, PredictionData, Prophet, ProphetOptions,
    SeasonalityOption, TrainingData, wasmstan::WasmstanOptimizer,
};
use chatcast_core::{ChatcastError, Forecast, Forecaster, ModelSnapshot, PreparedSeries};
use chrono::NaiveDateTime;

mod holidays;
pub use holidays::us_federal_holidays;

/// Backend name used in error tags and the model snapshot.
pub const BACKEND_NAME: &str = "prophet";

fn backend_err(e: impl ToString) -> ChatcastError {
    ChatcastError::backend(BACKEND_NAME, e.to_string())
}

/// The fixed model configuration for interval chat-volume data.
fn default_options() -> Result<ProphetOptions, ChatcastError> {
    let changepoint_range: PositiveFloat = 1.0.try_into().map_err(backend_err)?;
    Ok(ProphetOptions {
        growth: GrowthType::Linear,
        daily_seasonality: SeasonalityOption::Manual(true),
        weekly_seasonality: SeasonalityOption::Manual(true),
        yearly_seasonality: SeasonalityOption::Manual(false),
        seasonality_mode: FeatureMode::Additive,
        changepoint_range,
        holidays: us_federal_holidays(),
        ..Default::default()
    })
}

/// [`Forecaster`] implementation backed by Prophet.
///
/// `fit` consumes a dense prepared series (the preparer's imputation must be
/// on), trains a fresh model, and keeps it for subsequent `predict` calls.
pub struct ProphetForecaster {
    options: ProphetOptions,
    model: Option<Prophet<WasmstanOptimizer>>,
    trained_rows: usize,
}

impl ProphetForecaster {
    /// Build an unfitted forecaster with the fixed configuration.
    ///
    /// # Errors
    /// Returns a `Backend` error if the configuration is rejected by the
    /// underlying library.
    pub fn new() -> Result<Self, ChatcastError> {
        Ok(Self {
            options: default_options()?,
            model: None,
            trained_rows: 0,
        })
    }
}

impl Forecaster for ProphetForecaster {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn fit(&mut self, training: &PreparedSeries) -> Result<(), ChatcastError> {
        let data =
            TrainingData::new(training.timestamps_utc(), training.dense_y()?).map_err(backend_err)?;
        tracing::info!(rows = training.len(), "fitting prophet model");
        let mut model = Prophet::new(self.options.clone(), WasmstanOptimizer::new());
        model.fit(data, Default::default()).map_err(backend_err)?;
        self.trained_rows = training.len();
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, ds: &[NaiveDateTime]) -> Result<Forecast, ChatcastError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| ChatcastError::invalid_arg("predict called before fit"))?;
        let timestamps: Vec<i64> = ds.iter().map(|t| t.and_utc().timestamp()).collect();
        let predictions = model
            .predict(Some(PredictionData::new(timestamps)))
            .map_err(backend_err)?;

        let yhat = predictions.yhat;
        let lower = yhat
            .lower
            .ok_or_else(|| backend_err("no lower prediction interval returned"))?;
        let upper = yhat
            .upper
            .ok_or_else(|| backend_err("no upper prediction interval returned"))?;
        Forecast::new(ds.to_vec(), yhat.point, lower, upper)
    }

    fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            backend: BACKEND_NAME.to_string(),
            fitted: self.model.is_some(),
            trained_rows: self.trained_rows,
            options: serde_json::json!({
                "growth": "linear",
                "daily_seasonality": true,
                "weekly_seasonality": true,
                "yearly_seasonality": false,
                "seasonality_mode": "additive",
                "changepoint_range": 1.0,
                "holiday_calendar": "us-federal",
            }),
        }
    }
}
