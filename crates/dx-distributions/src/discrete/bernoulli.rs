//! Bernoulli distribution: a single trial with success probability θ.

use dx_core::Real;
use dx_math::comparison::is_close;

use crate::params::unpack;

fn theta(params: &[Real]) -> Real {
    let [theta] = unpack(params);
    if (0.0..=1.0).contains(&theta) {
        theta
    } else {
        Real::NAN
    }
}

/// `θ` at 1, `1 − θ` at 0, NaN elsewhere.
pub fn pmf(x: Real, params: &[Real]) -> Real {
    let theta = theta(params);
    if x == 0.0 {
        1.0 - theta
    } else if x == 1.0 {
        theta
    } else {
        Real::NAN
    }
}

/// Closed-form step function.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let theta = theta(params);
    if x.is_nan() || theta.is_nan() {
        Real::NAN
    } else if x < 0.0 {
        0.0
    } else if x < 1.0 {
        1.0 - theta
    } else {
        1.0
    }
}

/// 0 when `p ≤ 1 − θ`, otherwise 1.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let theta = theta(params);
    if !(0.0..=1.0).contains(&p) || theta.is_nan() {
        return Real::NAN;
    }
    let failure = 1.0 - theta;
    if p <= failure || is_close(p, failure) {
        0.0
    } else {
        1.0
    }
}

/// `{0, 1}`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_on_zero_and_one() {
        assert!((pmf(0.0, &[0.3]) - 0.7).abs() < 1e-15);
        assert!((pmf(1.0, &[0.3]) - 0.3).abs() < 1e-15);
        assert!(pmf(0.5, &[0.3]).is_nan());
        assert!(pmf(2.0, &[0.3]).is_nan());
        assert!(pmf(1.0, &[1.3]).is_nan());
    }

    #[test]
    fn quantile_splits_at_failure_probability() {
        assert_eq!(ppf(0.6, &[0.3]), 0.0);
        assert_eq!(ppf(0.7, &[0.3]), 0.0);
        assert_eq!(ppf(0.71, &[0.3]), 1.0);
        assert_eq!(cdf(0.5, &[0.3]), 0.7);
    }
}
