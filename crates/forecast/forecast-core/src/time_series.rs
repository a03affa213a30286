//! Multi-field time-series model
//!
//! Wraps the fitted submodels of every objective field of a time-series
//! resource and forecasts the fields named in a [`ForecastInput`].

use std::collections::{BTreeMap, BTreeSet};

use forecast_spi::{
    FittedSubmodel, ForecastError, ForecastInput, Result, SubmodelFilter, SubmodelForecast,
    SubmodelForecaster, SubmodelSource,
};
use rayon::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::selection::select_submodels;
use crate::state::extract_submodel;

/// Fitted submodels per objective field, plus the field-name lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesModel {
    resource: Option<String>,
    ets_models: BTreeMap<String, Vec<FittedSubmodel>>,
    field_ids: BTreeMap<String, String>,
    objective_fields: Vec<String>,
}

impl TimeSeriesModel {
    /// Build from a time-series description: either the full resource
    /// (`{"resource": ..., "object": {...}}`) or its bare `object`.
    pub fn from_value(description: &Value) -> Result<Self> {
        let root = description
            .as_object()
            .ok_or_else(|| ForecastError::parse("time series must be a JSON object"))?;
        let resource = root
            .get("resource")
            .and_then(Value::as_str)
            .map(str::to_string);
        let object = match root.get("object") {
            Some(Value::Object(object)) => object,
            Some(_) => return Err(ForecastError::parse("'object' must be a JSON object")),
            None => root,
        };
        let time_series = object
            .get("time_series")
            .and_then(Value::as_object)
            .ok_or_else(|| ForecastError::parse("missing 'time_series' section"))?;

        let mut ets_models = BTreeMap::new();
        match time_series.get("ets_models") {
            None | Some(Value::Null) => {}
            Some(Value::Object(fields)) => {
                for (field_id, submodels) in fields {
                    let submodels = submodels.as_array().ok_or_else(|| {
                        ForecastError::parse(format!(
                            "ets_models for field '{}' must be an array",
                            field_id
                        ))
                    })?;
                    let parsed = submodels
                        .iter()
                        .map(extract_submodel)
                        .collect::<Result<Vec<_>>>()?;
                    ets_models.insert(field_id.clone(), parsed);
                }
            }
            Some(_) => return Err(ForecastError::parse("'ets_models' must be a JSON object")),
        }

        let mut field_ids = BTreeMap::new();
        let fields = time_series.get("fields").or_else(|| object.get("fields"));
        if let Some(Value::Object(fields)) = fields {
            for (field_id, field) in fields {
                if let Some(name) = field.get("name").and_then(Value::as_str) {
                    field_ids.insert(name.to_string(), field_id.clone());
                }
            }
        }

        let objective_fields = match object
            .get("objective_fields")
            .or_else(|| time_series.get("objective_fields"))
        {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(ids)) => ids
                .iter()
                .map(|id| {
                    id.as_str().map(str::to_string).ok_or_else(|| {
                        ForecastError::parse("objective_fields must contain strings")
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(ForecastError::parse("'objective_fields' must be an array")),
        };

        debug!(
            resource = resource.as_deref().unwrap_or("<inline>"),
            fields = ets_models.len(),
            "loaded time series model"
        );

        Ok(Self {
            resource,
            ets_models,
            field_ids,
            objective_fields,
        })
    }

    /// Parse from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let description: Value = serde_json::from_str(json)?;
        Self::from_value(&description)
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Field ids that carry fitted submodels
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.ets_models.keys().map(String::as_str)
    }

    fn is_objective(&self, field_id: &str) -> bool {
        self.objective_fields.is_empty() || self.objective_fields.iter().any(|id| id == field_id)
    }

    /// Forecast every field in `input`.
    ///
    /// Submodels of a field run in parallel; output order follows selection
    /// order. Any failure aborts the whole call.
    pub fn forecast<F: SubmodelForecaster>(
        &self,
        forecaster: &F,
        input: &ForecastInput,
        default_filter: &SubmodelFilter,
    ) -> Result<BTreeMap<String, Vec<SubmodelForecast>>> {
        let mut output = BTreeMap::new();
        let mut requested = BTreeSet::new();
        for (field, field_input) in input {
            let field_id = self.resolve_field(field).ok_or_else(|| {
                let known: Vec<&str> = self.fields().collect();
                ForecastError::invalid_argument(
                    "input",
                    format!("unknown field '{}', expected one of [{}]", field, known.join(", ")),
                )
            })?;
            if !requested.insert(field_id.clone()) {
                return Err(ForecastError::invalid_argument(
                    "input",
                    format!("field '{}' requested twice", field),
                ));
            }
            if !self.is_objective(&field_id) {
                return Err(ForecastError::invalid_argument(
                    "input",
                    format!("field '{}' is not an objective field", field),
                ));
            }

            let horizon = match field_input.horizon {
                Some(h) if h > 0 => usize::try_from(h)
                    .map_err(|_| ForecastError::invalid_argument("horizon", "too large"))?,
                Some(h) => {
                    return Err(ForecastError::invalid_argument(
                        "horizon",
                        format!("must be at least 1 for field '{}', got {}", field, h),
                    ))
                }
                None => {
                    return Err(ForecastError::invalid_argument(
                        "horizon",
                        format!("missing for field '{}'", field),
                    ))
                }
            };

            let filter = field_input.ets_models.as_ref().unwrap_or(default_filter);
            let submodels = self.submodels(&field_id).unwrap_or(&[]);
            let selected = select_submodels(submodels, filter)?;

            let forecasts = selected
                .par_iter()
                .map(|submodel| {
                    forecaster
                        .forecast_submodel(submodel, horizon)
                        .map(|point_forecast| SubmodelForecast {
                            submodel: submodel.label(),
                            point_forecast,
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            debug!(field = %field_id, horizon, submodels = forecasts.len(), "forecast field");
            output.insert(field_id, forecasts);
        }
        Ok(output)
    }
}

impl SubmodelSource for TimeSeriesModel {
    fn submodels(&self, field_id: &str) -> Option<&[FittedSubmodel]> {
        self.ets_models.get(field_id).map(Vec::as_slice)
    }

    fn resolve_field(&self, field: &str) -> Option<String> {
        if self.ets_models.contains_key(field) {
            return Some(field.to_string());
        }
        self.field_ids
            .get(field)
            .filter(|id| self.ets_models.contains_key(id.as_str()))
            .cloned()
    }
}
