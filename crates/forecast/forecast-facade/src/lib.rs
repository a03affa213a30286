//! Forecast Facade
//!
//! High-level API for generating point forecasts from fitted ETS models.
//! Re-exports all public types from the forecast stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{engine, methods, point, selection, state, time_series};

// Re-export the point calculator and extractor at root
pub use forecast_core::{
    calc_point, extract_final_state, extract_submodel, parse_submodel, round_to_precision,
    season_contribution, select_submodels, PRECISION,
};

// Re-export SPI traits
pub use forecast_spi::{SubmodelForecaster, SubmodelSource};
