//! Weibull distribution with shape α and scale σ.

use dx_core::Real;
use dx_math::special::log1p;

use super::{is_probability, positive};
use crate::params::unpack;

/// `α/σ (x/σ)^(α−1) e^(−(x/σ)^α)`.
///
/// At `x = 0` the density is `1/σ` for `α = 1`, zero for `α > 1` and NaN
/// for `α < 1`.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [alpha, sigma] = unpack(params);
    if !positive(alpha) || !positive(sigma) || x.is_nan() || x < 0.0 {
        return Real::NAN;
    }
    if x == Real::INFINITY {
        return 0.0;
    }
    if x == 0.0 {
        return if alpha == 1.0 {
            1.0 / sigma
        } else if alpha > 1.0 {
            0.0
        } else {
            Real::NAN
        };
    }
    let z = x / sigma;
    (alpha.ln() - sigma.ln() + (alpha - 1.0) * z.ln() - z.powf(alpha)).exp()
}

/// `1 − e^(−(x/σ)^α)`.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [alpha, sigma] = unpack(params);
    if !positive(alpha) || !positive(sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x <= 0.0 {
        0.0
    } else if x == Real::INFINITY {
        1.0
    } else {
        -(-(x / sigma).powf(alpha)).exp_m1()
    }
}

/// `σ (−ln(1 − p))^(1/α)`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [alpha, sigma] = unpack(params);
    if !is_probability(p) || !positive(alpha) || !positive(sigma) {
        return Real::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    sigma * (-log1p(-p)).powf(1.0 / alpha)
}

/// `[0, ∞)`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (0.0, Real::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_one_is_exponential() {
        let x = 1.3;
        assert!((pdf(x, &[1.0, 2.0]) - 0.5 * (-0.65_f64).exp()).abs() < 1e-12);
        assert!((cdf(x, &[1.0, 2.0]) - (1.0 - (-0.65_f64).exp())).abs() < 1e-12);
        assert_eq!(pdf(0.0, &[1.0, 2.0]), 0.5);
        assert_eq!(pdf(0.0, &[2.0, 2.0]), 0.0);
        assert!(pdf(0.0, &[0.5, 2.0]).is_nan());
    }

    #[test]
    fn scale_is_the_63rd_percentile() {
        let c = cdf(2.0, &[3.0, 2.0]);
        assert!((c - (1.0 - (-1.0_f64).exp())).abs() < 1e-12, "got {c}");
    }
}
