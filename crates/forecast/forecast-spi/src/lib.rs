//! Forecast Service Provider Interface
//!
//! Defines the fitted-submodel data model, the error type and the traits
//! implemented by the ETS forecast engine.
//!
//! - [`FittedSubmodel`]: immutable description of one already-fitted submodel
//! - [`TrendMethod`] / [`SeasonalityMode`]: the closed sets of forecast variants
//! - [`SubmodelForecaster`]: contract for anything that turns a submodel into points
//! - [`ForecastError`]: standardized error type, with the [`Result`] alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{SubmodelForecaster, SubmodelSource};
pub use error::{ForecastError, Result};
pub use model::{
    Criterion, FieldInput, FinalState, FittedSubmodel, ForecastInput, ForecastRequest,
    SeasonalityMode, SubmodelFilter, SubmodelForecast, TrendMethod,
};
