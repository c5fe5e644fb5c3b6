//! Normal distribution.

use std::f64::consts::{FRAC_1_SQRT_2, PI, SQRT_2};

use dx_core::Real;
use dx_math::special::{erf, erf_inv};

use super::{is_probability, positive};
use crate::params::unpack;

fn valid(mu: Real, sigma: Real) -> bool {
    !mu.is_nan() && positive(sigma)
}

/// `e^(−z²/2) / (σ √(2π))`.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !valid(mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x.is_infinite() {
        return 0.0;
    }
    let z = (x - mu) / sigma;
    (-0.5 * z * z).exp() / (sigma * (2.0 * PI).sqrt())
}

/// `(1 + erf(z / √2)) / 2`.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !valid(mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x == Real::NEG_INFINITY {
        return 0.0;
    }
    if x == Real::INFINITY {
        return 1.0;
    }
    0.5 * (1.0 + erf((x - mu) / sigma * FRAC_1_SQRT_2))
}

/// `μ + √2 σ erf⁻¹(2p − 1)`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !is_probability(p) || !valid(mu, sigma) {
        return Real::NAN;
    }
    if p == 0.0 {
        return Real::NEG_INFINITY;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    mu + SQRT_2 * sigma * erf_inv(2.0 * p - 1.0)
}

/// The real line.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (Real::NEG_INFINITY, Real::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_normal_at_zero() {
        let d = pdf(0.0, &[0.0, 1.0]);
        assert!((d - 0.398_942).abs() < 1e-6, "got {d}");
        assert_eq!(cdf(0.0, &[0.0, 1.0]), 0.5);
        assert_eq!(ppf(0.5, &[3.0, 2.0]), 3.0);
    }

    #[test]
    fn nonpositive_scale_is_nan() {
        assert!(pdf(0.0, &[0.0, 0.0]).is_nan());
        assert!(cdf(0.0, &[0.0, -1.0]).is_nan());
    }
}
