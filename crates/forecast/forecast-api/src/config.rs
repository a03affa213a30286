//! Forecast configuration types.

use std::fs;
use std::path::Path;

use forecast_core::DampingRecurrence;
use forecast_spi::{Criterion, ForecastError, Result, SubmodelFilter};
use serde::{Deserialize, Serialize};

/// Engine and selection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Update rule for the damped-trend accumulator.
    pub damping: DampingRecurrence,
    /// Criterion used when a field input carries no submodel selection.
    pub default_criterion: Criterion,
    /// How many submodels the default selection keeps.
    pub default_limit: usize,
}

impl ForecastConfig {
    pub fn new(damping: DampingRecurrence) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    /// Selection applied to fields without an explicit `ets_models` block.
    pub fn default_filter(&self) -> SubmodelFilter {
        SubmodelFilter::best_by(self.default_criterion, self.default_limit)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config = serde_json::from_str::<Self>(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ForecastError::parse(format!("cannot read config {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(ForecastError::invalid_argument(
                "default_limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            damping: DampingRecurrence::Literal,
            default_criterion: Criterion::Aic,
            default_limit: 1,
        }
    }
}
