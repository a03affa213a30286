//! State extractor
//!
//! Builds a [`FittedSubmodel`] from the JSON description produced by the
//! upstream model-fitting step. Absent numeric fields default to `0.0` and an
//! absent seasonal sequence to empty; numeric strings are coerced to floats.

use forecast_spi::{FinalState, FittedSubmodel, ForecastError, Result};
use serde_json::{Map, Value};

/// Extract a fitted submodel from its description
pub fn extract_submodel(description: &Value) -> Result<FittedSubmodel> {
    let object = description
        .as_object()
        .ok_or_else(|| ForecastError::parse("submodel must be a JSON object"))?;

    let final_state = match object.get("final_state") {
        None | Some(Value::Null) => FinalState::default(),
        Some(state) => extract_final_state(state)?,
    };

    let (values, value) = match object.get("value") {
        None | Some(Value::Null) => (Vec::new(), None),
        Some(Value::Array(items)) => (float_sequence("value", items)?, None),
        Some(scalar) => {
            let x = coerce_f64("value", scalar)?;
            (vec![x], Some(x))
        }
    };

    Ok(FittedSubmodel {
        name: optional_string(object, "name")?,
        trend: optional_string(object, "trend")?,
        seasonality: optional_string(object, "seasonality")?,
        final_state,
        values,
        value,
        slope: float_or_zero(object, "slope")?,
        aic: optional_f64(object, "aic")?,
        aicc: optional_f64(object, "aicc")?,
        bic: optional_f64(object, "bic")?,
    })
}

/// Extract `l`, `b`, `phi` and `s` from a `final_state` object
pub fn extract_final_state(state: &Value) -> Result<FinalState> {
    let object = state
        .as_object()
        .ok_or_else(|| ForecastError::parse("final_state must be a JSON object"))?;

    let s = match object.get("s") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => float_sequence("s", items)?,
        Some(other) => {
            return Err(ForecastError::parse(format!(
                "final_state.s must be an array, got {}",
                other
            )))
        }
    };

    Ok(FinalState {
        l: float_or_zero(object, "l")?,
        b: float_or_zero(object, "b")?,
        phi: float_or_zero(object, "phi")?,
        s,
    })
}

/// Parse a submodel straight from JSON text
pub fn parse_submodel(json: &str) -> Result<FittedSubmodel> {
    let description: Value = serde_json::from_str(json)?;
    extract_submodel(&description)
}

pub(crate) fn coerce_f64(field: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ForecastError::parse(format!("'{}' is not representable as f64", field))),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            ForecastError::parse(format!("'{}' is not numeric: {:?}", field, s))
        }),
        other => Err(ForecastError::parse(format!(
            "'{}' must be numeric, got {}",
            field, other
        ))),
    }
}

fn float_sequence(field: &str, items: &[Value]) -> Result<Vec<f64>> {
    items.iter().map(|item| coerce_f64(field, item)).collect()
}

fn optional_f64(object: &Map<String, Value>, field: &str) -> Result<Option<f64>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_f64(field, value).map(Some),
    }
}

fn float_or_zero(object: &Map<String, Value>, field: &str) -> Result<f64> {
    Ok(optional_f64(object, field)?.unwrap_or(0.0))
}

fn optional_string(object: &Map<String, Value>, field: &str) -> Result<Option<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ForecastError::parse(format!(
            "'{}' must be a string, got {}",
            field, other
        ))),
    }
}
