//! Trait for turning a fitted submodel into point forecasts

use crate::error::{ForecastError, Result};
use crate::model::{FittedSubmodel, ForecastRequest, SeasonalityMode, TrendMethod};

/// Produces point forecasts from an already-fitted submodel
pub trait SubmodelForecaster: Send + Sync {
    /// Forecast `horizon` steps with an explicit trend method and seasonality
    fn forecast_points(
        &self,
        submodel: &FittedSubmodel,
        horizon: usize,
        trend: TrendMethod,
        seasonality: SeasonalityMode,
    ) -> Result<Vec<f64>>;

    /// Forecast from raw identifiers.
    ///
    /// Checks the horizon first, then the trend, then the seasonality, so an
    /// invalid request never reaches the algorithms.
    fn forecast(&self, submodel: &FittedSubmodel, request: &ForecastRequest) -> Result<Vec<f64>> {
        if request.horizon <= 0 {
            return Err(ForecastError::invalid_argument(
                "horizon",
                format!("must be at least 1, got {}", request.horizon),
            ));
        }
        let horizon = usize::try_from(request.horizon)
            .map_err(|_| ForecastError::invalid_argument("horizon", "too large"))?;
        let trend: TrendMethod = request.trend.parse()?;
        let seasonality: SeasonalityMode = request.seasonality.parse()?;
        self.forecast_points(submodel, horizon, trend, seasonality)
    }

    /// Forecast with the trend and seasonality the submodel describes itself
    fn forecast_submodel(&self, submodel: &FittedSubmodel, horizon: usize) -> Result<Vec<f64>> {
        let trend = submodel.trend_method()?;
        let seasonality = submodel.seasonality_mode()?;
        self.forecast_points(submodel, horizon, trend, seasonality)
    }
}
