//! Negative binomial distribution with shape `r` and burst size `b`.
//!
//! Same family as the (α, β) form with `α = r` and `β = 1 / b`.

use dx_core::Real;
use dx_math::special::{log1p, log_factorial, log_gamma};

use super::is_count;
use crate::params::unpack;
use crate::summation::{summed_cdf, summed_ppf, SummationSettings};

/// `Γ(y + r) / (Γ(r) y!) (1 + b)^(−r) (1 + 1/b)^(−y)`.
pub fn pmf(y: Real, params: &[Real]) -> Real {
    let [r, b] = unpack(params);
    if !(r > 0.0) || !(b > 0.0) || !is_count(y) {
        return Real::NAN;
    }
    (log_gamma(y + r) - log_gamma(r) - log_factorial(y) - r * log1p(b) - y * log1p(1.0 / b)).exp()
}

/// Summed mass function.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    summed_cdf(pmf, support(params), x, params, &SummationSettings::default())
}

/// Smallest `y` with `F(y) ≥ p`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    summed_ppf(pmf, support(params), p, params, &SummationSettings::default())
}

/// `[0, ∞)`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (0.0, Real::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_with_alpha_beta_form() {
        let (r, b) = (3.0, 0.8);
        for y in 0..15 {
            let lhs = pmf(y as Real, &[r, b]);
            let rhs = super::super::negative_binomial::pmf(y as Real, &[r, 1.0 / b]);
            assert!((lhs - rhs).abs() < 1e-12, "y={y}: {lhs} vs {rhs}");
        }
    }
}
