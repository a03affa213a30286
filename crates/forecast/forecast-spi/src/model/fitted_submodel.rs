//! Fitted submodel description

use serde::Serialize;

use crate::error::{ForecastError, Result};
use crate::model::{SeasonalityMode, TrendMethod};

/// Final smoothed state of an ETS submodel
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FinalState {
    /// Level
    pub l: f64,
    /// Trend
    pub b: f64,
    /// Damping factor
    pub phi: f64,
    /// Seasonal factors, oldest first
    pub s: Vec<f64>,
}

impl FinalState {
    /// Seasonal period, i.e. the number of seasonal factors
    pub fn period(&self) -> usize {
        self.s.len()
    }
}

/// One already-fitted submodel, as handed over by the model-fitting step.
///
/// Built once from the upstream description and never mutated. Trend and
/// seasonality identifiers are kept as raw strings so that an unknown trend
/// surfaces as [`ForecastError::UnsupportedTrend`] at dispatch time.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FittedSubmodel {
    /// Submodel name, e.g. `A,Ad,M` or `naive`
    pub name: Option<String>,
    /// Explicit trend identifier, overrides the one encoded in `name`
    pub trend: Option<String>,
    /// Explicit seasonality identifier, overrides the one encoded in `name`
    pub seasonality: Option<String>,
    pub final_state: FinalState,
    /// Raw fitted cycle for the replay methods; a scalar `value` becomes a single element
    pub values: Vec<f64>,
    /// Scalar `value`, used by `drift`
    pub value: Option<f64>,
    pub slope: f64,
    pub aic: Option<f64>,
    pub aicc: Option<f64>,
    pub bic: Option<f64>,
}

impl FittedSubmodel {
    /// Trend identifier: explicit field first, then the one encoded in the name
    pub fn trend_id(&self) -> Result<&str> {
        if let Some(trend) = &self.trend {
            return Ok(trend.as_str());
        }
        match &self.name {
            Some(name) => Ok(split_name(name).0),
            None => Err(ForecastError::parse(
                "submodel has neither a 'trend' nor a 'name'",
            )),
        }
    }

    /// Seasonality identifier; names without a seasonal component mean `N`
    pub fn seasonality_id(&self) -> &str {
        if let Some(seasonality) = &self.seasonality {
            return seasonality.as_str();
        }
        self.name
            .as_deref()
            .and_then(|name| split_name(name).1)
            .unwrap_or("N")
    }

    pub fn trend_method(&self) -> Result<TrendMethod> {
        self.trend_id()?.parse()
    }

    pub fn seasonality_mode(&self) -> Result<SeasonalityMode> {
        self.seasonality_id().parse()
    }

    /// Display label: the name when present, otherwise `trend,seasonality`
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!(
                "{},{}",
                self.trend.as_deref().unwrap_or("?"),
                self.seasonality_id()
            ),
        }
    }

    /// Scalar starting value for `drift`
    pub fn drift_value(&self) -> Result<f64> {
        match self.value {
            Some(value) => Ok(value),
            None if self.values.is_empty() => Ok(0.0),
            None => Err(ForecastError::parse(
                "drift submodel requires a scalar 'value'",
            )),
        }
    }
}

/// Splits `E,T,S` into `(T, Some(S))`; any other name is a bare trend
fn split_name(name: &str) -> (&str, Option<&str>) {
    let parts: Vec<&str> = name.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [_, trend, seasonality] => (*trend, Some(*seasonality)),
        _ => (name.trim(), None),
    }
}
