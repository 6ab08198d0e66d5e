use super::reference::{check_params, RefParams};
use super::types::CacMethod;
use crate::error::LqResult;
use crate::variables::Variable;
use std::f64::consts::SQRT_2;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// CAC value that the log method maps to the midpoint.
const CAC_LN_PIVOT: f64 = 100.0;

// Piecewise breakpoints (Agatston units).
const CAC_KNEE: f64 = 100.0;
const CAC_CEILING: f64 = 400.0;

#[inline(always)]
pub fn clamp_score(v: f64) -> f64 {
    v.clamp(SCORE_MIN, SCORE_MAX)
}

/// Standard normal CDF.
#[inline(always)]
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + libm::erf(z / SQRT_2))
}

/// Maps a raw value to 0-100 through the reference population's normal CDF.
///
/// A raw value equal to the mean lands on exactly 50 whatever the direction.
pub fn normalize_z(variable: Variable, x: f64, params: &RefParams) -> LqResult<f64> {
    check_params(variable, params)?;
    let z = params.direction.sign() * (x - params.mean) / params.sd;
    Ok(clamp_score(100.0 * normal_cdf(z)))
}

pub fn normalize_cac(x: f64, method: CacMethod) -> f64 {
    match method {
        CacMethod::Ln => cac_ln(x),
        CacMethod::Piecewise => cac_piecewise(x),
    }
}

fn cac_ln(x: f64) -> f64 {
    let z = -((x + 1.0).ln() - CAC_LN_PIVOT.ln());
    // ln of a non-positive argument is NaN; those inputs score as a zero CAC.
    if z.is_nan() {
        return SCORE_MAX;
    }
    clamp_score(100.0 * normal_cdf(z))
}

fn cac_piecewise(x: f64) -> f64 {
    if x == 0.0 {
        return SCORE_MAX;
    }
    if x >= CAC_CEILING {
        return SCORE_MIN;
    }
    if x <= CAC_KNEE {
        return clamp_score(100.0 - 0.2 * x);
    }
    clamp_score(50.0 - 0.1 * (x - CAC_KNEE))
}

pub fn normalize_fraction(x: f64, max: f64) -> f64 {
    clamp_score(100.0 * x / max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LqError;
    use crate::scorer::reference::Direction;
    use rstest::rstest;

    const EPS: f64 = 1e-9;

    fn params(direction: Direction) -> RefParams {
        RefParams::new(90.0, 25.0, direction)
    }

    #[rstest]
    #[case(Direction::HigherIsBetter)]
    #[case(Direction::LowerIsBetter)]
    fn test_mean_maps_to_fifty(#[case] direction: Direction) {
        let v = normalize_z(Variable::Apob, 90.0, &params(direction)).unwrap();
        assert_eq!(v, 50.0);
    }

    #[test]
    fn test_direction_reverses_monotonicity() {
        let up = params(Direction::HigherIsBetter);
        let down = params(Direction::LowerIsBetter);

        let up_lo = normalize_z(Variable::Apob, 60.0, &up).unwrap();
        let up_hi = normalize_z(Variable::Apob, 120.0, &up).unwrap();
        let down_lo = normalize_z(Variable::Apob, 60.0, &down).unwrap();
        let down_hi = normalize_z(Variable::Apob, 120.0, &down).unwrap();

        assert!(up_hi > up_lo);
        assert!(down_hi < down_lo);
        // Mirror images around the mean.
        assert!((up_hi - down_lo).abs() < EPS);
    }

    #[test]
    fn test_one_sd_above_mean() {
        let v = normalize_z(Variable::Apob, 115.0, &params(Direction::HigherIsBetter)).unwrap();
        assert!((v - 84.134_474_606_854_3).abs() < 1e-6, "got {}", v);
    }

    #[test]
    fn test_extreme_values_stay_in_range() {
        let p = params(Direction::HigherIsBetter);
        for x in [-1e12, -1e6, 0.0, 1e6, 1e12, f64::MAX] {
            let v = normalize_z(Variable::Apob, x, &p).unwrap();
            assert!((0.0..=100.0).contains(&v), "x={} -> {}", x, v);
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.0)]
    #[case(f64::NAN)]
    fn test_bad_sd_is_invalid_configuration(#[case] sd: f64) {
        let p = RefParams::new(90.0, sd, Direction::HigherIsBetter);
        let err = normalize_z(Variable::Apob, 90.0, &p).unwrap_err();
        assert!(matches!(err, LqError::InvalidConfiguration { ref variable, .. } if variable == "apob"));
    }

    #[rstest]
    #[case(0.0, 100.0)]
    #[case(50.0, 90.0)]
    #[case(100.0, 80.0)]
    #[case(250.0, 35.0)]
    #[case(399.0, 20.1)]
    #[case(400.0, 0.0)]
    #[case(800.0, 0.0)]
    fn test_cac_piecewise_points(#[case] x: f64, #[case] expected: f64) {
        let v = normalize_cac(x, CacMethod::Piecewise);
        assert!((v - expected).abs() < EPS, "f({}) = {}", x, v);
    }

    #[test]
    fn test_cac_piecewise_non_increasing() {
        let mut prev = normalize_cac(0.0, CacMethod::Piecewise);
        let mut x = 0.5;
        while x <= 400.0 {
            let v = normalize_cac(x, CacMethod::Piecewise);
            assert!(v <= prev + EPS, "increase at {}", x);
            prev = v;
            x += 0.5;
        }
    }

    #[test]
    fn test_cac_piecewise_steps_down_at_breakpoints() {
        // 100 belongs to the upper segment; the lower one starts at 50.
        let at_knee = normalize_cac(100.0, CacMethod::Piecewise);
        let past_knee = normalize_cac(100.0 + 1e-9, CacMethod::Piecewise);
        assert_eq!(at_knee, 80.0);
        assert!((past_knee - 50.0).abs() < 1e-6);

        let before_ceiling = normalize_cac(400.0 - 1e-9, CacMethod::Piecewise);
        assert!((before_ceiling - 20.0).abs() < 1e-6);
        assert_eq!(normalize_cac(400.0, CacMethod::Piecewise), 0.0);
    }

    #[test]
    fn test_cac_ln_shape() {
        let at_zero = normalize_cac(0.0, CacMethod::Ln);
        assert!(at_zero > 99.99 && at_zero <= 100.0);

        let expected = 100.0 * normal_cdf(-((101.0f64).ln() - (100.0f64).ln()));
        assert!((normalize_cac(100.0, CacMethod::Ln) - expected).abs() < EPS);

        let mut prev = at_zero;
        for x in [1.0, 10.0, 50.0, 99.0, 200.0, 400.0, 1000.0, 5000.0] {
            let v = normalize_cac(x, CacMethod::Ln);
            assert!(v < prev, "not decreasing at {}", x);
            prev = v;
        }
    }

    #[test]
    fn test_cac_ln_degenerate_input_is_bounded() {
        assert_eq!(normalize_cac(-5.0, CacMethod::Ln), 100.0);
        assert!(normalize_cac(1e300, CacMethod::Ln) >= 0.0);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(26.0, 50.0)]
    #[case(52.0, 100.0)]
    #[case(60.0, 100.0)]
    #[case(-4.0, 0.0)]
    fn test_fraction(#[case] x: f64, #[case] expected: f64) {
        assert!((normalize_fraction(x, 52.0) - expected).abs() < EPS);
    }
}
