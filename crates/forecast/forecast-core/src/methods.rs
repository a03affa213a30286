//! Forecast algorithms, one per trend method
//!
//! Every function yields exactly `horizon` points for steps `h = 0..horizon`,
//! each rounded to [`PRECISION`](crate::point::PRECISION) decimal places.

use forecast_spi::{FinalState, ForecastError, Result, SeasonalityMode};
use serde::{Deserialize, Serialize};

use crate::point::{calc_point, round_to_precision, season_contribution};

/// Update rule for the damping accumulator of the `Ad` and `Md` methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DampingRecurrence {
    /// `phi_0 = phi`, `phi_(h+1) = phi + phi_h^(h+2)`; `Ad` yields `l * b * phi_h`
    #[default]
    Literal,
    /// `phi_h = phi + phi^2 + ... + phi^(h+1)`; `Ad` yields `l + b * phi_h`
    Cumulative,
}

/// Successive damping accumulator values, starting at `phi`
#[derive(Debug, Clone)]
pub struct DampingSchedule {
    phi: f64,
    current: f64,
    step: usize,
    recurrence: DampingRecurrence,
}

impl DampingSchedule {
    pub fn new(phi: f64, recurrence: DampingRecurrence) -> Self {
        Self {
            phi,
            current: phi,
            step: 0,
            recurrence,
        }
    }
}

impl Iterator for DampingSchedule {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.current;
        let exponent = (self.step + 2) as f64;
        self.current = match self.recurrence {
            DampingRecurrence::Literal => self.phi + self.current.powf(exponent),
            DampingRecurrence::Cumulative => self.current + self.phi.powf(exponent),
        };
        self.step += 1;
        Some(value)
    }
}

/// `trivial`, `naive` and `mean`: replay the fitted cycle
pub fn replay(values: &[f64], horizon: usize) -> Result<Vec<f64>> {
    let first = *values
        .first()
        .ok_or_else(|| ForecastError::parse("replay submodel has no fitted 'value'"))?;
    let period = values.len();
    Ok((0..horizon)
        .map(|h| {
            let point = if period > 1 { values[h % period] } else { first };
            round_to_precision(point)
        })
        .collect())
}

/// `drift`: linear extrapolation from the last fitted value
pub fn drift(value: f64, slope: f64, horizon: usize) -> Vec<f64> {
    (0..horizon)
        .map(|h| round_to_precision(value + slope * (h + 1) as f64))
        .collect()
}

/// `N`: level only
pub fn level(state: &FinalState, horizon: usize, seasonality: SeasonalityMode) -> Vec<f64> {
    (0..horizon)
        .map(|h| calc_point(state.l, season_contribution(&state.s, h), seasonality))
        .collect()
}

/// `A`: level plus linear trend
pub fn additive(state: &FinalState, horizon: usize, seasonality: SeasonalityMode) -> Vec<f64> {
    (0..horizon)
        .map(|h| {
            let base = state.l + state.b * (h + 1) as f64;
            calc_point(base, season_contribution(&state.s, h), seasonality)
        })
        .collect()
}

/// `Ad`: damped additive trend
pub fn additive_damped(
    state: &FinalState,
    horizon: usize,
    seasonality: SeasonalityMode,
    recurrence: DampingRecurrence,
) -> Vec<f64> {
    DampingSchedule::new(state.phi, recurrence)
        .take(horizon)
        .enumerate()
        .map(|(h, phi_h)| {
            let base = match recurrence {
                DampingRecurrence::Literal => state.l * (state.b * phi_h),
                DampingRecurrence::Cumulative => state.l + state.b * phi_h,
            };
            calc_point(base, season_contribution(&state.s, h), seasonality)
        })
        .collect()
}

/// `M`: multiplicative trend growth
pub fn multiplicative(state: &FinalState, horizon: usize, seasonality: SeasonalityMode) -> Vec<f64> {
    (0..horizon)
        .map(|h| {
            let base = state.l * state.b.powf((h + 1) as f64);
            calc_point(base, season_contribution(&state.s, h), seasonality)
        })
        .collect()
}

/// `Md`: damped multiplicative trend
pub fn multiplicative_damped(
    state: &FinalState,
    horizon: usize,
    seasonality: SeasonalityMode,
    recurrence: DampingRecurrence,
) -> Vec<f64> {
    DampingSchedule::new(state.phi, recurrence)
        .take(horizon)
        .enumerate()
        .map(|(h, phi_h)| {
            let base = state.l * state.b.powf(phi_h);
            calc_point(base, season_contribution(&state.s, h), seasonality)
        })
        .collect()
}
