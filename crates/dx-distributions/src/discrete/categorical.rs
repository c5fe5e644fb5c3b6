//! Categorical distribution over the categories 1 to 4.
//!
//! The fourth probability is implied, `θ₄ = 1 − θ₁ − θ₂ − θ₃`. A negative
//! implied probability makes the whole configuration invalid, and every
//! evaluator returns NaN.

use dx_core::Real;
use dx_math::comparison::is_close;

use super::is_integer;
use crate::params::unpack;

fn probabilities(params: &[Real]) -> Option<[Real; 4]> {
    let [t1, t2, t3] = unpack(params);
    let t4 = 1.0 - t1 - t2 - t3;
    let probs = [t1, t2, t3, t4];
    if probs.iter().all(|t| *t >= 0.0) {
        Some(probs)
    } else {
        None
    }
}

/// `θₓ` for `x ∈ {1, 2, 3, 4}`.
pub fn pmf(x: Real, params: &[Real]) -> Real {
    let Some(probs) = probabilities(params) else {
        return Real::NAN;
    };
    if is_integer(x) && (1.0..=4.0).contains(&x) {
        probs[x as usize - 1]
    } else {
        Real::NAN
    }
}

/// Sum of the probabilities of categories up to `x`.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let Some(probs) = probabilities(params) else {
        return Real::NAN;
    };
    if x.is_nan() {
        return Real::NAN;
    }
    if x < 1.0 {
        return 0.0;
    }
    if x >= 4.0 {
        return 1.0;
    }
    probs[..x.floor() as usize].iter().sum()
}

/// Smallest category `k` with `F(k) ≥ p`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let Some(probs) = probabilities(params) else {
        return Real::NAN;
    };
    if !(0.0..=1.0).contains(&p) {
        return Real::NAN;
    }
    let mut sum = 0.0;
    for (k, t) in probs.iter().enumerate().take(3) {
        sum += t;
        if sum >= p || is_close(sum, p) {
            return (k + 1) as Real;
        }
    }
    4.0
}

/// `{1, 2, 3, 4}`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (1.0, 4.0)
}
