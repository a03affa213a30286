//! Forecast Consumer API
//!
//! Consumer configuration and builder APIs for the ETS forecast engine.
//!
//! This crate provides:
//! - [`ForecastConfig`] for damping and default submodel selection
//! - [`ForecasterBuilder`] and the configured [`Forecaster`]
//! - Re-exports from SPI and core for convenience

mod builder;
mod config;

pub use builder::ForecasterBuilder;
pub use config::ForecastConfig;

// Re-export from core
pub use forecast_core::{
    engine, methods, point, selection, state, time_series, DampingRecurrence, ForecastEngine,
    TimeSeriesModel,
};

// Re-export types from SPI
pub use forecast_spi::{
    Criterion, FieldInput, FinalState, FittedSubmodel, ForecastError, ForecastInput,
    ForecastRequest, Result, SeasonalityMode, SubmodelFilter, SubmodelForecast,
    SubmodelForecaster, SubmodelSource, TrendMethod,
};

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::info;

/// Forecast engine paired with its selection defaults
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    engine: ForecastEngine,
    config: ForecastConfig,
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Result<Self> {
        ForecasterBuilder::from_config(config).build()
    }

    pub fn builder() -> ForecasterBuilder {
        ForecasterBuilder::new()
    }

    pub fn engine(&self) -> &ForecastEngine {
        &self.engine
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast a single submodel description with explicit identifiers
    pub fn forecast_description(
        &self,
        description: &Value,
        request: &ForecastRequest,
    ) -> Result<Vec<f64>> {
        let submodel = state::extract_submodel(description)?;
        self.engine.forecast(&submodel, request)
    }

    /// Forecast the requested fields of a time-series model
    pub fn forecast_model(
        &self,
        model: &TimeSeriesModel,
        input: &ForecastInput,
    ) -> Result<BTreeMap<String, Vec<SubmodelForecast>>> {
        let output = model.forecast(&self.engine, input, &self.config.default_filter())?;
        info!(
            fields = output.len(),
            submodels = output.values().map(Vec::len).sum::<usize>(),
            "forecast complete"
        );
        Ok(output)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastConfig, Forecaster, ForecasterBuilder};
    pub use forecast_core::{DampingRecurrence, ForecastEngine, TimeSeriesModel};
    pub use forecast_spi::{
        Criterion, FieldInput, FittedSubmodel, ForecastError, ForecastInput, ForecastRequest,
        Result, SeasonalityMode, SubmodelFilter, SubmodelForecast, SubmodelForecaster,
        TrendMethod,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_forecast_description() {
        let forecaster = Forecaster::default();
        let points = forecaster
            .forecast_description(
                &json!({"final_state": {"l": 2.0, "b": 0.5}}),
                &ForecastRequest::new(3, "A", "N"),
            )
            .unwrap();
        assert_eq!(points, vec![2.5, 3.0, 3.5]);
    }

    #[test]
    fn test_forecast_description_not_object() {
        let err = Forecaster::default()
            .forecast_description(&json!([1, 2]), &ForecastRequest::new(3, "A", "N"))
            .unwrap_err();
        assert!(matches!(err, ForecastError::Parse(_)));
    }

    #[test]
    fn test_forecast_model_uses_config_default() {
        let model = TimeSeriesModel::from_value(&json!({
            "time_series": {
                "ets_models": {
                    "000001": [
                        {"name": "A,N,N", "bic": 5.0, "aic": 9.0, "final_state": {"l": 1}},
                        {"name": "A,A,N", "bic": 9.0, "aic": 5.0, "final_state": {"l": 1, "b": 1}}
                    ]
                }
            }
        }))
        .unwrap();
        let mut input = ForecastInput::new();
        input.insert("000001".to_string(), FieldInput::with_horizon(1));

        let by_aic = Forecaster::default().forecast_model(&model, &input).unwrap();
        assert_eq!(by_aic["000001"][0].submodel, "A,A,N");

        let by_bic = Forecaster::builder()
            .default_criterion(Criterion::Bic)
            .build()
            .unwrap()
            .forecast_model(&model, &input)
            .unwrap();
        assert_eq!(by_bic["000001"][0].submodel, "A,N,N");
    }
}
