//! Cauchy distribution.

use std::f64::consts::PI;

use dx_core::Real;

use super::{is_probability, positive};
use crate::params::unpack;

/// `1 / (π σ (1 + z²))`.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !positive(sigma) || mu.is_nan() {
        return Real::NAN;
    }
    let z = (x - mu) / sigma;
    1.0 / (PI * sigma * (1.0 + z * z))
}

/// `½ + atan(z) / π`.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !positive(sigma) || mu.is_nan() {
        return Real::NAN;
    }
    0.5 + ((x - mu) / sigma).atan() / PI
}

/// `μ + σ tan(π (p − ½))`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !is_probability(p) || !positive(sigma) || mu.is_nan() {
        return Real::NAN;
    }
    if p == 0.0 {
        return Real::NEG_INFINITY;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    mu + sigma * (PI * (p - 0.5)).tan()
}

/// The real line.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (Real::NEG_INFINITY, Real::INFINITY)
}
