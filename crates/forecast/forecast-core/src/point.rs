//! Point calculator
//!
//! Combines the level/trend base with the seasonal contribution and rounds
//! the result to a fixed number of decimal places.

use forecast_spi::SeasonalityMode;

/// Decimal places kept in every forecast value
pub const PRECISION: i32 = 5;

const SCALE: f64 = 100_000.0;

/// Round to [`PRECISION`] decimal places, halves away from zero
pub fn round_to_precision(x: f64) -> f64 {
    (x * SCALE).round() / SCALE
}

/// Seasonal factor for horizon step `h`.
///
/// The index `|1 - period + (h mod period)|` anchors the pattern to the end of
/// the fitted series. An empty sequence contributes `0.0` whatever the
/// seasonality mode, which is neutral only for additive seasonality.
pub fn season_contribution(s: &[f64], h: usize) -> f64 {
    if s.is_empty() {
        return 0.0;
    }
    let period = s.len();
    let index = (1 + (h % period)).abs_diff(period);
    s[index]
}

/// Combine `op1` (level and trend) with `op2` (season) and round
pub fn calc_point(op1: f64, op2: f64, seasonality: SeasonalityMode) -> f64 {
    let raw = match seasonality {
        SeasonalityMode::Additive => op1 + op2,
        SeasonalityMode::Multiplicative => op1 * op2,
        SeasonalityMode::None => op1,
    };
    round_to_precision(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_contribution_wraps() {
        let s = [1.0, 2.0, 3.0, 4.0];
        let expected = [4.0, 3.0, 2.0, 1.0, 4.0, 3.0, 2.0, 1.0];
        for (h, want) in expected.iter().enumerate() {
            assert_eq!(season_contribution(&s, h), *want, "h = {}", h);
        }
    }

    #[test]
    fn test_season_contribution_empty_is_zero() {
        assert_eq!(season_contribution(&[], 0), 0.0);
        assert_eq!(season_contribution(&[], 17), 0.0);
    }

    #[test]
    fn test_season_contribution_single_factor() {
        assert_eq!(season_contribution(&[1.3], 0), 1.3);
        assert_eq!(season_contribution(&[1.3], 9), 1.3);
    }

    #[test]
    fn test_calc_point_modes() {
        assert_eq!(calc_point(10.0, 2.0, SeasonalityMode::Additive), 12.0);
        assert_eq!(calc_point(10.0, 2.0, SeasonalityMode::Multiplicative), 20.0);
        assert_eq!(calc_point(10.0, 2.0, SeasonalityMode::None), 10.0);
    }

    #[test]
    fn test_calc_point_rounds() {
        assert_eq!(calc_point(1.000000123, 0.0, SeasonalityMode::None), 1.0);
        assert_eq!(calc_point(1.0 / 3.0, 0.0, SeasonalityMode::None), 0.33333);
        assert_eq!(calc_point(2.0 / 3.0, 0.0, SeasonalityMode::None), 0.66667);
    }

    #[test]
    fn test_round_to_precision() {
        assert_eq!(round_to_precision(-1.234567), -1.23457);
        assert_eq!(round_to_precision(0.0), 0.0);
        assert_eq!(round_to_precision(42.0), 42.0);
    }

    #[test]
    fn test_round_to_precision_halves_go_up() {
        assert_eq!(round_to_precision(0.000125), 0.00013);
        assert_eq!(round_to_precision(0.000025), 0.00003);
        assert_eq!(round_to_precision(2.5e-5 + 1.0), 1.00003);
    }
}
