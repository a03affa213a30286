//! Submodel selection model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::model::FittedSubmodel;

/// Information criterion stored with each fitted submodel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    #[default]
    Aic,
    Aicc,
    Bic,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Aic => "aic",
            Criterion::Aicc => "aicc",
            Criterion::Bic => "bic",
        }
    }

    /// Criterion value of a submodel, if it was stored
    pub fn value_of(&self, submodel: &FittedSubmodel) -> Option<f64> {
        match self {
            Criterion::Aic => submodel.aic,
            Criterion::Aicc => submodel.aicc,
            Criterion::Bic => submodel.bic,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aic" => Ok(Criterion::Aic),
            "aicc" => Ok(Criterion::Aicc),
            "bic" => Ok(Criterion::Bic),
            other => Err(ForecastError::invalid_argument(
                "criterion",
                format!("'{}' is not one of aic, aicc, bic", other),
            )),
        }
    }
}

/// Which submodels of a field to forecast with
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmodelFilter {
    /// Positions in the field's submodel list
    pub indices: Vec<usize>,
    /// Regular expressions matched against submodel names
    pub names: Vec<String>,
    /// Rank candidates by this criterion, lowest first
    pub criterion: Option<Criterion>,
    /// How many ranked candidates to keep
    pub limit: Option<usize>,
}

impl SubmodelFilter {
    /// The `limit` best submodels by `criterion`
    pub fn best_by(criterion: Criterion, limit: usize) -> Self {
        Self {
            criterion: Some(criterion),
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
            && self.names.is_empty()
            && self.criterion.is_none()
            && self.limit.is_none()
    }
}
