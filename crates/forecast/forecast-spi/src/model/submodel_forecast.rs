//! Per-submodel forecast output

use serde::{Deserialize, Serialize};

/// Point forecast produced by one submodel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmodelForecast {
    /// Name of the submodel that produced the forecast
    pub submodel: String,
    /// One value per horizon step, rounded to 5 decimal places
    pub point_forecast: Vec<f64>,
}
