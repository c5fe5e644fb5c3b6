//! Continuous uniform distribution on `[α, β]`.

use dx_core::Real;

use super::is_probability;
use crate::params::unpack;

fn bounds(params: &[Real]) -> Option<(Real, Real)> {
    let [alpha, beta] = unpack(params);
    (alpha.is_finite() && beta.is_finite() && alpha < beta).then_some((alpha, beta))
}

/// `1 / (β − α)` on the support, NaN elsewhere or when `β ≤ α`.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    match bounds(params) {
        Some((alpha, beta)) if x >= alpha && x <= beta => 1.0 / (beta - alpha),
        _ => Real::NAN,
    }
}

/// Linear between the bounds, clamped to 0 and 1; NaN when `β ≤ α`.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let Some((alpha, beta)) = bounds(params) else {
        return Real::NAN;
    };
    if x.is_nan() {
        Real::NAN
    } else if x <= alpha {
        0.0
    } else if x >= beta {
        1.0
    } else {
        (x - alpha) / (beta - alpha)
    }
}

/// `α + p (β − α)`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    match bounds(params) {
        Some((alpha, beta)) if is_probability(p) => alpha + p * (beta - alpha),
        _ => Real::NAN,
    }
}

/// `[α, β]`.
pub fn support(params: &[Real]) -> (Real, Real) {
    bounds(params).unwrap_or((Real::NAN, Real::NAN))
}
