//! Multidimensional root finding.
//!
//! A [`TrustRegion`] dogleg solver drives a vector of residuals to zero.
//! Residual functions implement [`ResidualFunction`]; any closure
//! `Fn(&DVector<Real>) -> DVector<Real>` already does, with a
//! central-difference Jacobian.

mod jacobian;
mod trust_region;

use dx_core::Real;
use nalgebra::{DMatrix, DVector};

pub use jacobian::{central_difference_jacobian, JACOBIAN_STEP};
pub use trust_region::{RootResult, TerminationReason, TrustRegion, TrustRegionSettings};

/// A vector-valued function whose root is sought.
pub trait ResidualFunction {
    /// Residuals at `x`; a root has every component equal to zero.
    fn residuals(&self, x: &DVector<Real>) -> DVector<Real>;

    /// Jacobian at `x`, row `i` being the gradient of residual `i`.
    ///
    /// Defaults to central differences with step [`JACOBIAN_STEP`].
    fn jacobian(&self, x: &DVector<Real>) -> DMatrix<Real> {
        central_difference_jacobian(|v| self.residuals(v), x, JACOBIAN_STEP)
    }
}

impl<F> ResidualFunction for F
where
    F: Fn(&DVector<Real>) -> DVector<Real>,
{
    fn residuals(&self, x: &DVector<Real>) -> DVector<Real> {
        self(x)
    }
}
