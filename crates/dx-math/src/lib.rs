//! # dx-math
//!
//! Numerical building blocks for the distribution evaluators: special
//! functions (log-gamma, incomplete beta and gamma, error function),
//! tolerant comparisons, evenly spaced grids, one-dimensional solvers,
//! a trust-region root finder over nalgebra vectors, and integration rules.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Numerical integration.
pub mod integrals;

/// Multidimensional root finding (trust-region dogleg).
pub mod roots;

/// Evenly spaced sequences.
pub mod sequences;

/// 1D root-finding solvers.
pub mod solvers1d;

/// Special functions.
pub mod special;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, is_close, is_one, is_zero};
pub use roots::{ResidualFunction, TrustRegion, TrustRegionSettings};
pub use sequences::linspace;
pub use special::{erf, erf_inv, log1p, log_factorial, log_gamma};
