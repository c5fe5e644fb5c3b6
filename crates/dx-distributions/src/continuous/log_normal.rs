//! Log-normal distribution: `e^Y` for `Y ~ Normal(μ, σ)`.

use std::f64::consts::{FRAC_1_SQRT_2, PI, SQRT_2};

use dx_core::Real;
use dx_math::special::{erf, erf_inv};

use super::{is_probability, positive};
use crate::params::unpack;

fn valid(mu: Real, sigma: Real) -> bool {
    mu.is_finite() && positive(sigma)
}

/// `e^(−(ln x − μ)² / 2σ²) / (x σ √(2π))`.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !valid(mu, sigma) || x.is_nan() || x < 0.0 {
        return Real::NAN;
    }
    if x == 0.0 || x == Real::INFINITY {
        return 0.0;
    }
    let z = (x.ln() - mu) / sigma;
    (-0.5 * z * z).exp() / (x * sigma * (2.0 * PI).sqrt())
}

/// `(1 + erf((ln x − μ) / (σ √2))) / 2`.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !valid(mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x <= 0.0 {
        0.0
    } else if x == Real::INFINITY {
        1.0
    } else {
        0.5 * (1.0 + erf((x.ln() - mu) / sigma * FRAC_1_SQRT_2))
    }
}

/// `exp(μ + √2 σ erf⁻¹(2p − 1))`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !is_probability(p) || !valid(mu, sigma) {
        return Real::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    (mu + SQRT_2 * sigma * erf_inv(2.0 * p - 1.0)).exp()
}

/// `[0, ∞)`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (0.0, Real::INFINITY)
}
