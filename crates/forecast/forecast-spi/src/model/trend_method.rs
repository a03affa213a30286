//! Trend method enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// The nine forecast algorithms, keyed by their trend identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendMethod {
    /// Replays the fitted cycle
    #[serde(rename = "trivial")]
    Trivial,
    /// Replays the fitted cycle (last observed values)
    #[serde(rename = "naive")]
    Naive,
    /// Replays the fitted cycle (mean of the observed values)
    #[serde(rename = "mean")]
    Mean,
    /// Linear extrapolation from the last fitted value
    #[serde(rename = "drift")]
    Drift,
    /// Level only
    #[serde(rename = "N")]
    None,
    /// Level plus linear trend
    #[serde(rename = "A")]
    Additive,
    /// Damped additive trend
    #[serde(rename = "Ad")]
    AdditiveDamped,
    /// Multiplicative trend growth
    #[serde(rename = "M")]
    Multiplicative,
    /// Damped multiplicative trend
    #[serde(rename = "Md")]
    MultiplicativeDamped,
}

impl TrendMethod {
    /// Every supported trend, in identifier order
    pub const ALL: [TrendMethod; 9] = [
        TrendMethod::Trivial,
        TrendMethod::Naive,
        TrendMethod::Mean,
        TrendMethod::Drift,
        TrendMethod::None,
        TrendMethod::Additive,
        TrendMethod::AdditiveDamped,
        TrendMethod::Multiplicative,
        TrendMethod::MultiplicativeDamped,
    ];

    /// Identifier used in fitted-model descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendMethod::Trivial => "trivial",
            TrendMethod::Naive => "naive",
            TrendMethod::Mean => "mean",
            TrendMethod::Drift => "drift",
            TrendMethod::None => "N",
            TrendMethod::Additive => "A",
            TrendMethod::AdditiveDamped => "Ad",
            TrendMethod::Multiplicative => "M",
            TrendMethod::MultiplicativeDamped => "Md",
        }
    }

    /// Whether the method replays raw fitted values instead of ETS state
    pub fn is_replay(&self) -> bool {
        matches!(
            self,
            TrendMethod::Trivial | TrendMethod::Naive | TrendMethod::Mean
        )
    }
}

impl fmt::Display for TrendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendMethod {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrendMethod::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ForecastError::UnsupportedTrend(s.to_string()))
    }
}
