//! Multi-field forecast input

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::SubmodelFilter;

/// Per-field forecast parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldInput {
    /// Number of future periods; required, must be at least 1
    #[serde(default)]
    pub horizon: Option<i64>,
    /// Submodel selection; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ets_models: Option<SubmodelFilter>,
}

impl FieldInput {
    pub fn with_horizon(horizon: i64) -> Self {
        Self {
            horizon: Some(horizon),
            ets_models: None,
        }
    }

    pub fn filter(mut self, filter: SubmodelFilter) -> Self {
        self.ets_models = Some(filter);
        self
    }
}

/// Forecast input keyed by objective field id or field name
pub type ForecastInput = BTreeMap<String, FieldInput>;
