//! Negative binomial distribution with mean μ and dispersion φ.
//!
//! Same family as the (α, β) form with `α = φ` and `β = φ / μ`.

use dx_core::Real;
use dx_math::special::{log_factorial, log_gamma};

use super::is_count;
use crate::params::unpack;
use crate::summation::{summed_cdf, summed_ppf, SummationSettings};

/// `Γ(y + φ) / (Γ(φ) y!) (φ / (μ + φ))^φ (μ / (μ + φ))^y`.
pub fn pmf(y: Real, params: &[Real]) -> Real {
    let [mu, phi] = unpack(params);
    if !(mu > 0.0) || !(phi > 0.0) || !is_count(y) {
        return Real::NAN;
    }
    let ln_mu_phi = (mu + phi).ln();
    (log_gamma(y + phi) - log_gamma(phi) - log_factorial(y)
        + phi * (phi.ln() - ln_mu_phi)
        + y * (mu.ln() - ln_mu_phi))
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
