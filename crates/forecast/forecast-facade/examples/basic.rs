//! Basic example: forecasting fitted ETS submodels
//!
//! Run with: cargo run --example basic -p forecast-facade

use forecast_facade::prelude::*;
use forecast_facade::extract_submodel;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== forecast-facade Basic Examples ===\n");

    let forecaster = Forecaster::default();

    // 1. Single submodel, explicit identifiers
    println!("1. Holt-Winters additive (A,A,A)");
    let submodel = extract_submodel(&json!({
        "final_state": {"l": 120.0, "b": 1.5, "s": [-4.0, 2.0, 6.0, -4.0]}
    }))?;
    let points = forecaster
        .engine()
        .forecast(&submodel, &ForecastRequest::new(8, "A", "A"))?;
    println!("   Forecast: {:?}\n", points);

    // 2. Every trend method on the same state
    println!("2. All trend methods (seasonality N)");
    let submodel = extract_submodel(&json!({
        "value": [118.0, 121.0, 125.0],
        "final_state": {"l": 120.0, "b": 1.02, "phi": 0.9}
    }))?;
    for trend in TrendMethod::ALL {
        if trend == TrendMethod::Drift {
            continue;
        }
        let points = forecaster
            .engine()
            .forecast_points(&submodel, 4, trend, SeasonalityMode::None)?;
        println!("   {:>7}: {:?}", trend, points);
    }
    println!();

    // 3. Multi-field time-series model with submodel selection
    println!("3. Time-series model, best two submodels by AIC");
    let model = TimeSeriesModel::from_value(&json!({
        "time_series": {
            "fields": {"000001": {"name": "Sales"}},
            "ets_models": {
                "000001": [
                    {"name": "drift", "aic": 95.0, "value": 125.0, "slope": 2.0},
                    {"name": "A,N,N", "aic": 80.0, "final_state": {"l": 123.0}},
                    {"name": "A,Ad,N", "aic": 82.0, "final_state": {"l": 123.0, "b": 1.2, "phi": 0.85}}
                ]
            }
        }
    }))?;
    let mut input = ForecastInput::new();
    input.insert(
        "Sales".to_string(),
        FieldInput::with_horizon(5).filter(SubmodelFilter::best_by(Criterion::Aic, 2)),
    );
    for (field, forecasts) in forecaster.forecast_model(&model, &input)? {
        for forecast in forecasts {
            println!("   {} {}: {:?}", field, forecast.submodel, forecast.point_forecast);
        }
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
