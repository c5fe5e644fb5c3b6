//! Pareto distribution with minimum `y_min` and tail index α.

use dx_core::Real;
use dx_math::special::log1p;

use super::{is_probability, positive};
use crate::params::unpack;

/// `α y_min^α / x^(α+1)` from `y_min` on, NaN below.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [y_min, alpha] = unpack(params);
    if !positive(y_min) || !positive(alpha) || x.is_nan() || x < y_min {
        return Real::NAN;
    }
    if x == Real::INFINITY {
        return 0.0;
    }
    (alpha.ln() + alpha * y_min.ln() - (alpha + 1.0) * x.ln()).exp()
}

/// `1 − (y_min / x)^α`.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [y_min, alpha] = unpack(params);
    if !positive(y_min) || !positive(alpha) || x.is_nan() {
        return Real::NAN;
    }
    if x <= y_min {
        0.0
    } else if x == Real::INFINITY {
        1.0
    } else {
        1.0 - (y_min / x).powf(alpha)
    }
}

/// `y_min (1 − p)^(−1/α)`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [y_min, alpha] = unpack(params);
    if !is_probability(p) || !positive(y_min) || !positive(alpha) {
        return Real::NAN;
    }
    if p == 0.0 {
        return y_min;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    y_min * (-log1p(-p) / alpha).exp()
}

/// `[y_min, ∞)`.
pub fn support(params: &[Real]) -> (Real, Real) {
    let [y_min] = unpack(params);
    (y_min, Real::INFINITY)
}
