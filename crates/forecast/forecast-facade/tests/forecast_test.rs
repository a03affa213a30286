//! Property tests for the forecast engine

use forecast_facade::{
    season_contribution, FinalState, FittedSubmodel, ForecastEngine, ForecastError,
    ForecastRequest, SeasonalityMode, SubmodelForecaster, TrendMethod,
};

const SEASONALITIES: [SeasonalityMode; 3] = [
    SeasonalityMode::Additive,
    SeasonalityMode::Multiplicative,
    SeasonalityMode::None,
];

fn submodel(l: f64, b: f64, phi: f64, s: Vec<f64>) -> FittedSubmodel {
    FittedSubmodel {
        final_state: FinalState { l, b, phi, s },
        values: vec![12.0, 15.0, 11.0],
        ..Default::default()
    }
}

fn forecast(submodel: &FittedSubmodel, horizon: usize, trend: TrendMethod) -> Vec<f64> {
    ForecastEngine::new()
        .forecast_points(submodel, horizon, trend, SeasonalityMode::None)
        .unwrap()
}

#[test]
fn test_length_matches_horizon_for_every_pair() {
    let model = submodel(50.0, 1.02, 0.95, vec![0.8, 1.0, 1.2, 1.0]);
    let engine = ForecastEngine::new();
    for trend in TrendMethod::ALL {
        if trend == TrendMethod::Drift {
            continue;
        }
        for seasonality in SEASONALITIES {
            for horizon in 1..=24 {
                let points = engine
                    .forecast_points(&model, horizon, trend, seasonality)
                    .unwrap();
                assert_eq!(points.len(), horizon, "{},{} h={}", trend, seasonality, horizon);
            }
        }
    }
}

#[test]
fn test_drift_length_matches_horizon() {
    let model = FittedSubmodel {
        value: Some(3.0),
        values: vec![3.0],
        slope: 0.25,
        ..Default::default()
    };
    for seasonality in SEASONALITIES {
        let points = ForecastEngine::new()
            .forecast_points(&model, 9, TrendMethod::Drift, seasonality)
            .unwrap();
        assert_eq!(points.len(), 9);
    }
}

#[test]
fn test_replay_methods_are_identical() {
    let model = submodel(0.0, 0.0, 0.0, vec![]);
    let trivial = forecast(&model, 10, TrendMethod::Trivial);
    let naive = forecast(&model, 10, TrendMethod::Naive);
    let mean = forecast(&model, 10, TrendMethod::Mean);
    assert_eq!(trivial, naive);
    assert_eq!(naive, mean);
    assert_eq!(&trivial[..4], &[12.0, 15.0, 11.0, 12.0]);
}

#[test]
fn test_drift_is_linear() {
    let model = FittedSubmodel {
        value: Some(100.0),
        values: vec![100.0],
        slope: 2.5,
        ..Default::default()
    };
    let points = forecast(&model, 20, TrendMethod::Drift);
    assert!((points[0] - 102.5).abs() < 1e-9);
    for pair in points.windows(2) {
        assert!((pair[1] - pair[0] - 2.5).abs() < 1e-9);
    }
}

#[test]
fn test_level_only_baseline() {
    let model = submodel(42.125, 3.0, 0.9, vec![]);
    for point in forecast(&model, 12, TrendMethod::None) {
        assert_eq!(point, 42.125);
    }
}

#[test]
fn test_additive_trend_baseline() {
    let model = submodel(10.0, 0.75, 0.0, vec![]);
    let points = forecast(&model, 8, TrendMethod::Additive);
    for (h, point) in points.iter().enumerate() {
        let expected = 10.0 + 0.75 * (h + 1) as f64;
        assert!((point - expected).abs() < 1e-9, "h={}", h);
    }
}

#[test]
fn test_multiplicative_trend_baseline() {
    let model = submodel(20.0, 1.5, 0.0, vec![]);
    let points = forecast(&model, 6, TrendMethod::Multiplicative);
    for (h, point) in points.iter().enumerate() {
        let expected = 20.0 * 1.5f64.powi(h as i32 + 1);
        assert!((point - expected).abs() < 1e-5, "h={}", h);
    }
}

#[test]
fn test_seasonal_index_pattern() {
    let s = [1.0, 2.0, 3.0, 4.0];
    let pattern: Vec<f64> = (0..8).map(|h| season_contribution(&s, h)).collect();
    assert_eq!(pattern, vec![4.0, 3.0, 2.0, 1.0, 4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn test_seasonal_forecast_uses_pattern() {
    let model = submodel(100.0, 0.0, 0.0, vec![1.0, 2.0, 3.0, 4.0]);
    let points = ForecastEngine::new()
        .forecast_points(&model, 5, TrendMethod::None, SeasonalityMode::Additive)
        .unwrap();
    assert_eq!(points, vec![104.0, 103.0, 102.0, 101.0, 104.0]);
}

#[test]
fn test_rounding_to_five_places() {
    let model = submodel(1.000000123, 0.0, 0.0, vec![]);
    assert_eq!(forecast(&model, 3, TrendMethod::None), vec![1.0, 1.0, 1.0]);

    let model = submodel(1.0, 1.0 / 3.0, 0.0, vec![]);
    let points = forecast(&model, 2, TrendMethod::Additive);
    assert_eq!(points, vec![1.33333, 1.66667]);
}

#[test]
fn test_unknown_trend_has_no_partial_output() {
    let model = submodel(1.0, 1.0, 1.0, vec![]);
    let result = ForecastEngine::new().forecast(&model, &ForecastRequest::new(5, "bogus", "N"));
    assert_eq!(result, Err(ForecastError::UnsupportedTrend("bogus".to_string())));
}

#[test]
fn test_invalid_seasonality_and_horizon() {
    let model = submodel(1.0, 1.0, 1.0, vec![]);
    let engine = ForecastEngine::new();

    let err = engine
        .forecast(&model, &ForecastRequest::new(3, "A", "X"))
        .unwrap_err();
    assert!(matches!(err, ForecastError::InvalidArgument { .. }));

    let err = engine
        .forecast(&model, &ForecastRequest::new(0, "A", "N"))
        .unwrap_err();
    assert!(matches!(err, ForecastError::InvalidArgument { .. }));
}

#[test]
fn test_multiplicative_seasonality_without_factors_collapses() {
    // Empty seasonal factors contribute 0.0 in every mode.
    let model = submodel(10.0, 1.0, 0.0, vec![]);
    let points = ForecastEngine::new()
        .forecast_points(&model, 3, TrendMethod::Additive, SeasonalityMode::Multiplicative)
        .unwrap();
    assert_eq!(points, vec![0.0, 0.0, 0.0]);
}
