//! Forecast request model

use serde::{Deserialize, Serialize};

/// Request for a single-submodel forecast, using raw identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Number of future periods; must be at least 1
    pub horizon: i64,
    /// Trend identifier (`trivial`, `naive`, `mean`, `drift`, `N`, `A`, `Ad`, `M`, `Md`)
    pub trend: String,
    /// Seasonality identifier (`A`, `M`, `N`)
    pub seasonality: String,
}

impl ForecastRequest {
    pub fn new(horizon: i64, trend: impl Into<String>, seasonality: impl Into<String>) -> Self {
        Self {
            horizon,
            trend: trend.into(),
            seasonality: seasonality.into(),
        }
    }
}
