//! Model module containing data structures

mod fitted_submodel;
mod forecast_input;
mod forecast_request;
mod seasonality_mode;
mod selection;
mod submodel_forecast;
mod trend_method;

pub use fitted_submodel::{FinalState, FittedSubmodel};
pub use forecast_input::{FieldInput, ForecastInput};
pub use forecast_request::ForecastRequest;
pub use seasonality_mode::SeasonalityMode;
pub use selection::{Criterion, SubmodelFilter};
pub use submodel_forecast::SubmodelForecast;
pub use trend_method::TrendMethod;
