//! Seasonality mode enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// How the seasonal contribution combines with level and trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeasonalityMode {
    /// Additive seasonality: point = base + season
    #[serde(rename = "A")]
    Additive,
    /// Multiplicative seasonality: point = base * season
    #[serde(rename = "M")]
    Multiplicative,
    /// No seasonality: point = base
    #[default]
    #[serde(rename = "N")]
    None,
}

impl SeasonalityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonalityMode::Additive => "A",
            SeasonalityMode::Multiplicative => "M",
            SeasonalityMode::None => "N",
        }
    }
}

impl fmt::Display for SeasonalityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonalityMode {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(SeasonalityMode::Additive),
            "M" => Ok(SeasonalityMode::Multiplicative),
            "N" => Ok(SeasonalityMode::None),
            other => Err(ForecastError::invalid_argument(
                "seasonality",
                format!("'{}' is not one of A, M, N", other),
            )),
        }
    }
}
