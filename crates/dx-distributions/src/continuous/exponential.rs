//! Exponential distribution with rate β.

use dx_core::Real;
use dx_math::special::log1p;

use super::{is_probability, positive};
use crate::params::unpack;

/// `β e^(−βx)` for `x ≥ 0`, NaN below zero.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [beta] = unpack(params);
    if !positive(beta) || x.is_nan() || x < 0.0 {
        return Real::NAN;
    }
    beta * (-beta * x).exp()
}

/// `1 − e^(−βx)`.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [beta] = unpack(params);
    if !positive(beta) || x.is_nan() {
        return Real::NAN;
    }
    if x <= 0.0 {
        0.0
    } else if x == Real::INFINITY {
        1.0
    } else {
        -(-beta * x).exp_m1()
    }
}

/// `−ln(1 − p) / β`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [beta] = unpack(params);
    if !is_probability(p) || !positive(beta) {
        return Real::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    -log1p(-p) / beta
}

/// `[0, ∞)`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (0.0, Real::INFINITY)
}
