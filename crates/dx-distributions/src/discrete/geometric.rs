//! Geometric distribution: failures before the first success.

use dx_core::Real;
use dx_math::special::log1p;

use super::is_integer;
use crate::params::unpack;
use crate::summation::{summed_cdf, SummationSettings};

fn theta(params: &[Real]) -> Real {
    let [theta] = unpack(params);
    if (0.0..=1.0).contains(&theta) {
        theta
    } else {
        Real::NAN
    }
}

/// `θ (1 − θ)^x`.
pub fn pmf(x: Real, params: &[Real]) -> Real {
    let theta = theta(params);
    if theta.is_nan() || !is_integer(x) {
        return Real::NAN;
    }
    if theta == 1.0 {
        return if x == 0.0 { 1.0 } else { 0.0 };
    }
    if theta == 0.0 {
        return 0.0;
    }
    if x < 0.0 {
        return Real::NAN;
    }
    (x * log1p(-theta) + theta.ln()).exp()
}

/// Summed mass function.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    summed_cdf(pmf, support(params), x, params, &SummationSettings::default())
}

/// `⌈ln(1 − p) / ln(1 − θ) − 1⌉`, clamped at zero.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let theta = theta(params);
    if !(0.0..=1.0).contains(&p) || theta.is_nan() {
        return Real::NAN;
    }
    if p == 0.0 || theta == 1.0 {
        return 0.0;
    }
    if p == 1.0 || theta == 0.0 {
        return Real::INFINITY;
    }
    let t = log1p(-p) / log1p(-theta) - 1.0;
    // A ratio that is an integer up to rounding must not step one too far.
    let r = t.round();
    let k = if (t - r).abs() <= 1e-9 * r.abs().max(1.0) {
        r
    } else {
        t.ceil()
    };
    k.max(0.0)
}

/// `[0, ∞)`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (0.0, Real::INFINITY)
}
