//! Continuous families.
//!
//! Each module exposes `pdf`, `cdf`, `ppf` and `support` with the shared
//! evaluator signature. Invalid parameters give NaN everywhere; a point
//! outside the support gives NaN or zero density as documented per family.

pub mod beta;
pub mod cauchy;
pub mod exponential;
pub mod gamma;
pub mod half_cauchy;
pub mod half_normal;
pub mod half_student_t;
pub mod inverse_gamma;
pub mod log_normal;
pub mod normal;
pub mod pareto;
pub mod student_t;
pub mod uniform;
pub mod weibull;

use dx_core::Real;

/// Whether `p` is a probability.
#[inline]
pub(crate) fn is_probability(p: Real) -> bool {
    (0.0..=1.0).contains(&p)
}

/// Strictly positive and not NaN.
#[inline]
pub(crate) fn positive(v: Real) -> bool {
    v > 0.0
}
