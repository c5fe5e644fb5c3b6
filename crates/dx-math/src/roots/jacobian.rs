//! Finite-difference Jacobians.

use dx_core::Real;
use nalgebra::{DMatrix, DVector};

/// Default central-difference step, roughly the cube root of machine epsilon.
pub const JACOBIAN_STEP: Real = 4.7e-6;

/// Jacobian of `f` at `x` by central differences with step `eps`.
///
/// Costs `2 n` evaluations of `f` for `n` unknowns.
pub fn central_difference_jacobian<F>(f: F, x: &DVector<Real>, eps: Real) -> DMatrix<Real>
where
    F: Fn(&DVector<Real>) -> DVector<Real>,
{
    let n = x.len();
    let m = f(x).len();
    let mut jac = DMatrix::zeros(m, n);
    let mut x_plus = x.clone();
    let mut x_minus = x.clone();

    for j in 0..n {
        x_plus[j] += eps;
        x_minus[j] -= eps;
        let col = (f(&x_plus) - f(&x_minus)) / (2.0 * eps);
        jac.set_column(j, &col);
        x_plus[j] = x[j];
        x_minus[j] = x[j];
    }
    jac
}
