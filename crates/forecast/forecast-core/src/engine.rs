//! Forecast engine: maps a trend method to its algorithm

use forecast_spi::{
    FittedSubmodel, ForecastError, Result, SeasonalityMode, SubmodelForecaster, TrendMethod,
};
use tracing::{debug, warn};

use crate::methods::{self, DampingRecurrence};

/// Stateless forecast generator.
///
/// Holds only its configuration, so one instance can serve any number of
/// threads against shared, read-only submodels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForecastEngine {
    damping: DampingRecurrence,
}

impl ForecastEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(damping: DampingRecurrence) -> Self {
        Self { damping }
    }

    pub fn damping(&self) -> DampingRecurrence {
        self.damping
    }
}

impl SubmodelForecaster for ForecastEngine {
    fn forecast_points(
        &self,
        submodel: &FittedSubmodel,
        horizon: usize,
        trend: TrendMethod,
        seasonality: SeasonalityMode,
    ) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(ForecastError::invalid_argument(
                "horizon",
                "must be at least 1, got 0",
            ));
        }
        debug!(%trend, %seasonality, horizon, "generating forecast");

        let state = &submodel.final_state;
        if seasonality == SeasonalityMode::Multiplicative
            && state.period() == 0
            && !trend.is_replay()
            && trend != TrendMethod::Drift
        {
            warn!(
                submodel = %submodel.label(),
                "multiplicative seasonality without seasonal factors; points collapse to 0"
            );
        }

        let points = match trend {
            TrendMethod::Trivial | TrendMethod::Naive | TrendMethod::Mean => {
                methods::replay(&submodel.values, horizon)?
            }
            TrendMethod::Drift => methods::drift(submodel.drift_value()?, submodel.slope, horizon),
            TrendMethod::None => methods::level(state, horizon, seasonality),
            TrendMethod::Additive => methods::additive(state, horizon, seasonality),
            TrendMethod::AdditiveDamped => {
                methods::additive_damped(state, horizon, seasonality, self.damping)
            }
            TrendMethod::Multiplicative => methods::multiplicative(state, horizon, seasonality),
            TrendMethod::MultiplicativeDamped => {
                methods::multiplicative_damped(state, horizon, seasonality, self.damping)
            }
        };
        Ok(points)
    }
}
