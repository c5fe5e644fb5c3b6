//! Discrete families.
//!
//! Each module exposes `pmf`, `cdf`, `ppf` and `support` with the shared
//! evaluator signature. Every mass function is NaN at non-integer points
//! and outside its support.

pub mod bernoulli;
pub mod beta_binomial;
pub mod binomial;
pub mod categorical;
pub mod discrete_uniform;
pub mod geometric;
pub mod hypergeometric;
pub mod negative_binomial;
pub mod negative_binomial_mu_phi;
pub mod negative_binomial_r_b;
pub mod poisson;

use dx_core::Real;

/// Whether `x` is a finite whole number.
#[inline]
pub(crate) fn is_integer(x: Real) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Whether `x` is a finite, non-negative whole number.
#[inline]
pub(crate) fn is_count(x: Real) -> bool {
    is_integer(x) && x >= 0.0
}
