//! Forecast Core
//!
//! Forecast generation from already-fitted exponential-smoothing submodels:
//! state extraction, method dispatch over the nine trend variants, point
//! calculation with fixed-precision rounding, and submodel selection for
//! multi-field time-series models.

pub mod engine;
pub mod methods;
pub mod point;
pub mod selection;
pub mod state;
pub mod time_series;

// Re-export SPI types for implementations
pub use forecast_spi::{
    Criterion, FieldInput, FinalState, FittedSubmodel, ForecastError, ForecastInput,
    ForecastRequest, Result, SeasonalityMode, SubmodelFilter, SubmodelForecast,
    SubmodelForecaster, SubmodelSource, TrendMethod,
};

// Re-export main types
pub use engine::ForecastEngine;
pub use methods::DampingRecurrence;
pub use point::{calc_point, round_to_precision, season_contribution, PRECISION};
pub use selection::select_submodels;
pub use state::{extract_final_state, extract_submodel, parse_submodel};
pub use time_series::TimeSeriesModel;
