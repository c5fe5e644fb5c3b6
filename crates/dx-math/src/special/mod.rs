//! Special functions behind the distribution evaluators.
//!
//! Every function here is pure and total over `f64`: arguments outside the
//! mathematical domain give NaN instead of an error, so one bad grid point
//! never stops the rest of a curve from being evaluated.

mod beta;
mod erf;
mod gamma;

use dx_core::Real;

pub use beta::{beta_continued_fraction, regularized_incomplete_beta};
pub use erf::{erf, erf_inv};
pub use gamma::{
    gamma_inc_lower, gamma_inc_upper, ln_beta, ln_choice, log_factorial, log_gamma,
    LN_FACTORIAL_TABLE_MAX,
};

/// `0.5 * ln(2π)`.
pub const HALF_LN_2PI: Real = 0.918_938_533_204_672_8;

/// `ln(1 + x)`, accurate for small `x`.
///
/// Below `|x| = 1e-4` the second-order Taylor form `x - x²/2` replaces the
/// direct logarithm, whose argument would lose half its digits to rounding.
/// Returns NaN for `x ≤ -1`.
#[inline]
pub fn log1p(x: Real) -> Real {
    if x.is_nan() || x <= -1.0 {
        Real::NAN
    } else if x.abs() > 1e-4 {
        (1.0 + x).ln()
    } else {
        (-0.5 * x + 1.0) * x
    }
}
