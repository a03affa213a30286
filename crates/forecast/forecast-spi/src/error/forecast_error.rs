//! Forecast error types

use thiserror::Error;

/// Errors that can occur while generating forecasts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The fitted-model description is structurally invalid
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid argument value
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Trend identifier outside the supported set
    #[error("Unsupported trend '{0}'")]
    UnsupportedTrend(String),
}

impl ForecastError {
    /// Shorthand for [`ForecastError::Parse`]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Shorthand for [`ForecastError::InvalidArgument`]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
