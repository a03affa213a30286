//! Contract module containing trait definitions for forecast operations

mod submodel_forecaster;
mod submodel_source;

pub use submodel_forecaster::SubmodelForecaster;
pub use submodel_source::SubmodelSource;
