//! Beta distribution on `[0, 1]`.

use dx_core::Real;
use dx_math::{
    solvers1d::brent,
    special::{ln_beta, log1p, regularized_incomplete_beta},
};

use super::{is_probability, positive};
use crate::params::unpack;

const PPF_ACCURACY: Real = 1e-12;

/// Density at the boundary where the exponent on `x` is `shape − 1`.
fn boundary_density(shape: Real, ln_b: Real) -> Real {
    if shape == 1.0 {
        (-ln_b).exp()
    } else if shape > 1.0 {
        0.0
    } else {
        Real::NAN
    }
}

/// `x^(α−1) (1 − x)^(β−1) / B(α, β)`.
///
/// At `x = 0` the density is finite only for `α ≥ 1`; for `α < 1` it is
/// NaN. The same holds at `x = 1` with `β`.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [alpha, beta] = unpack(params);
    if !positive(alpha) || !positive(beta) || !(0.0..=1.0).contains(&x) {
        return Real::NAN;
    }
    let ln_b = ln_beta(alpha, beta);
    if x == 0.0 {
        return boundary_density(alpha, ln_b);
    }
    if x == 1.0 {
        return boundary_density(beta, ln_b);
    }
    ((alpha - 1.0) * x.ln() + (beta - 1.0) * log1p(-x) - ln_b).exp()
}

/// Regularized incomplete beta function.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [alpha, beta] = unpack(params);
    if !positive(alpha) || !positive(beta) || x.is_nan() {
        return Real::NAN;
    }
    if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else {
        regularized_incomplete_beta(x, alpha, beta)
    }
}

/// Brent's method on `[0, 1]`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [alpha, beta] = unpack(params);
    if !is_probability(p) || !positive(alpha) || !positive(beta) {
        return Real::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return 1.0;
    }
    brent(|x| p - cdf(x, params), 0.0, 1.0, PPF_ACCURACY).unwrap_or(Real::NAN)
}

/// `[0, 1]`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_rules() {
        // Beta(1, 3): density 3 (1 − x)², equal to 3 at zero.
        assert!((pdf(0.0, &[1.0, 3.0]) - 3.0).abs() < 1e-10);
        assert_eq!(pdf(0.0, &[2.0, 3.0]), 0.0);
        assert!(pdf(0.0, &[0.5, 3.0]).is_nan());
        assert!(pdf(1.0, &[2.0, 0.5]).is_nan());
        assert!(pdf(1.2, &[2.0, 2.0]).is_nan());
    }

    #[test]
    fn symmetric_median() {
        let m = ppf(0.5, &[3.0, 3.0]);
        assert!((m - 0.5).abs() < 1e-7, "got {m}");
        assert!((cdf(0.5, &[3.0, 3.0]) - 0.5).abs() < 1e-7);
    }
}
