//! Negative binomial distribution in the (α, β) parametrization.
//!
//! Mean `α/β`; `β` plays the role of a rate. The (μ, φ) and (r, b) forms in
//! the sibling modules describe the same family.

use dx_core::Real;
use dx_math::special::{log1p, log_factorial, log_gamma};

use super::is_count;
use crate::params::unpack;
use crate::summation::{summed_cdf, summed_ppf, SummationSettings};

/// `Γ(y + α) / (Γ(α) y!) (β / (1 + β))^α (1 + β)^(−y)`.
pub fn pmf(y: Real, params: &[Real]) -> Real {
    let [alpha, beta] = unpack(params);
    if !(alpha > 0.0) || !(beta > 0.0) || !is_count(y) {
        return Real::NAN;
    }
    (log_gamma(y + alpha) - log_gamma(alpha) - log_factorial(y)
        + alpha * (beta / (1.0 + beta)).ln()
        - y * log1p(beta))
    .exp()
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
