//! Trust-region dogleg iteration for systems of nonlinear equations.

use std::time::Duration;

use dx_core::{Real, Stopwatch};
use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace};

use super::ResidualFunction;

const ON_BOUNDARY: Real = 1e-12;

/// Settings for [`TrustRegion`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrustRegionSettings {
    /// Converged once every `|r_i|` is at most this.
    pub tolerance: Real,
    /// Hard cap on iterations.
    pub max_iterations: usize,
    /// Largest allowed trust radius `δ̄`; the first radius is `0.99 δ̄`.
    pub max_radius: Real,
    /// Steps with an actual-to-predicted reduction ratio above this are taken.
    pub eta: Real,
    /// Give up once the trust radius shrinks below this.
    pub min_radius: Real,
    /// Wall-clock budget for one solve, if any. Ignored on targets without a
    /// clock, where the iteration cap alone bounds the solve.
    pub time_budget: Option<Duration>,
}

impl Default for TrustRegionSettings {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            max_iterations: 200,
            max_radius: 1000.0,
            eta: 0.125,
            min_radius: 1e-12,
            time_budget: Some(Duration::from_millis(250)),
        }
    }
}

/// Why a trust-region solve stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every residual is within tolerance.
    Converged,
    /// The iteration cap was hit.
    MaxIterations,
    /// The wall-clock budget ran out.
    TimeBudget,
    /// The trust radius collapsed below its minimum.
    RadiusCollapsed,
}

/// Outcome of a trust-region solve.
#[derive(Debug, Clone)]
pub struct RootResult {
    /// Final iterate.
    pub x: DVector<Real>,
    /// Residuals at `x`.
    pub residuals: DVector<Real>,
    /// Iterations performed.
    pub iterations: usize,
    /// Reason for termination.
    pub reason: TerminationReason,
}

impl RootResult {
    /// Whether the solve met its tolerance.
    pub fn converged(&self) -> bool {
        self.reason == TerminationReason::Converged
    }

    /// Largest absolute residual, NaN if any residual is NaN.
    pub fn max_residual(&self) -> Real {
        max_abs(&self.residuals)
    }
}

/// Dogleg trust-region root finder.
#[derive(Debug, Clone, Default)]
pub struct TrustRegion {
    settings: TrustRegionSettings,
}

fn max_abs(r: &DVector<Real>) -> Real {
    r.iter().fold(0.0, |acc: Real, v| {
        if acc.is_nan() || v.is_nan() {
            Real::NAN
        } else {
            acc.max(v.abs())
        }
    })
}

fn within_tolerance(r: &DVector<Real>, tol: Real) -> bool {
    let m = max_abs(r);
    !m.is_nan() && m <= tol
}

impl TrustRegion {
    /// Create a solver with the given settings.
    pub fn new(settings: TrustRegionSettings) -> Self {
        Self { settings }
    }

    /// The settings in use.
    pub fn settings(&self) -> &TrustRegionSettings {
        &self.settings
    }

    /// Run the iteration from `x0` and report how it ended.
    ///
    /// Never fails; inspect [`RootResult::converged`]. A step that produces
    /// non-finite residuals counts as no reduction, so the radius shrinks
    /// until the iterate stays in a region where the residuals are defined.
    pub fn solve<R>(&self, f: &R, x0: DVector<Real>) -> RootResult
    where
        R: ResidualFunction + ?Sized,
    {
        let s = &self.settings;
        let started = Stopwatch::start();

        let mut x = x0;
        let mut r = f.residuals(&x);
        let mut jac = f.jacobian(&x);
        let mut jt = jac.transpose();
        let mut jtj = &jt * &jac;
        let mut jtr = &jt * &r;
        let mut delta = 0.99 * s.max_radius;
        let mut iterations = 0;

        let reason = loop {
            if within_tolerance(&r, s.tolerance) {
                break TerminationReason::Converged;
            }
            if iterations >= s.max_iterations {
                break TerminationReason::MaxIterations;
            }
            if delta < s.min_radius || delta.is_nan() {
                break TerminationReason::RadiusCollapsed;
            }
            if s.time_budget.map_or(false, |b| started.exceeded(b)) {
                break TerminationReason::TimeBudget;
            }

            let p = dogleg_step(&jtj, &jtr, delta);
            let p_norm = p.norm();
            let x_new = &x + &p;
            let r_new = f.residuals(&x_new);
            let rho = reduction_ratio(&r, &r_new, &jac, &p);

            if rho < 0.25 {
                delta = if p_norm.is_finite() { p_norm / 4.0 } else { delta / 4.0 };
            } else if rho > 0.75 && (p_norm - delta).abs() < ON_BOUNDARY {
                delta = (2.0 * delta).min(s.max_radius);
            }

            if rho > s.eta {
                x = x_new;
                r = r_new;
                jac = f.jacobian(&x);
                jt = jac.transpose();
                jtj = &jt * &jac;
                jtr = &jt * &r;
            }

            iterations += 1;
            trace!(iterations, rho, delta, residual = max_abs(&r), "trust-region step");
        };

        debug!(?reason, iterations, residual = max_abs(&r), "trust-region solve finished");
        RootResult {
            x,
            residuals: r,
            iterations,
            reason,
        }
    }
}

/// Actual over predicted reduction of `‖r‖²`; non-finite ratios count as 0.
fn reduction_ratio(
    r: &DVector<Real>,
    r_new: &DVector<Real>,
    jac: &DMatrix<Real>,
    p: &DVector<Real>,
) -> Real {
    let r2 = r.norm_squared();
    let actual = r2 - r_new.norm_squared();
    let predicted = r2 - (r + jac * p).norm_squared();
    let rho = actual / predicted;
    if rho.is_finite() {
        rho
    } else {
        0.0
    }
}

/// Dogleg step for the Gauss-Newton model `‖r + J p‖²` within radius `delta`.
///
/// Takes the full Newton step when `JᵀJ` is positive definite and the step
/// fits, otherwise the Cauchy point, otherwise the point where the segment
/// from the Cauchy point to the Newton point crosses the boundary.
fn dogleg_step(jtj: &DMatrix<Real>, jtr: &DVector<Real>, delta: Real) -> DVector<Real> {
    let newton = jtj.clone().cholesky().map(|ch| -ch.solve(jtr));
    if let Some(pj) = &newton {
        if pj.norm() <= delta {
            return pj.clone();
        }
    }

    let norm_jtr = jtr.norm();
    if norm_jtr == 0.0 || !norm_jtr.is_finite() {
        return DVector::zeros(jtr.len());
    }
    let curvature = jtr.dot(&(jtj * jtr));
    let tau = if curvature > 0.0 {
        (norm_jtr.powi(3) / (delta * curvature)).min(1.0)
    } else {
        1.0
    };
    let pc = jtr * (-tau * delta / norm_jtr);
    let pc_norm = pc.norm();

    let pj = match newton {
        Some(pj) if (pc_norm - delta).abs() > ON_BOUNDARY => pj,
        _ => return pc,
    };

    // Solve ‖pc + β (pj - pc)‖² = δ² for the root β in [0, 1].
    let pj2 = pj.norm_squared();
    let pc2 = pc_norm * pc_norm;
    let pjpc = pj.dot(&pc);
    let a = pj2 + pc2 - 2.0 * pjpc;
    let b = 2.0 * (pjpc - pc2);
    let c = pc2 - delta * delta;
    let q = -0.5 * (b + b.signum() * (b * b - 4.0 * a * c).sqrt());
    let beta = if b.abs() < ON_BOUNDARY {
        (-c / a).sqrt()
    } else if b < 0.0 {
        q / a
    } else {
        c / q
    };

    if (0.0..=1.0).contains(&beta) {
        &pc + (pj - &pc) * beta
    } else {
        pc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec2(a: Real, b: Real) -> DVector<Real> {
        DVector::from_vec(vec![a, b])
    }

    #[test]
    fn linear_system() {
        // 2x + y = 5, x - y = 1  =>  x = 2, y = 1
        let f = |v: &DVector<Real>| vec2(2.0 * v[0] + v[1] - 5.0, v[0] - v[1] - 1.0);
        let result = TrustRegion::default().solve(&f, vec2(0.0, 0.0));
        assert!(result.converged());
        assert!((result.x[0] - 2.0).abs() < 1e-8, "got {}", result.x);
        assert!((result.x[1] - 1.0).abs() < 1e-8, "got {}", result.x);
    }

    #[test]
    fn rosenbrock_residuals() {
        // Root of (10 (y - x²), 1 - x) is (1, 1).
        let f = |v: &DVector<Real>| vec2(10.0 * (v[1] - v[0] * v[0]), 1.0 - v[0]);
        let result = TrustRegion::default().solve(&f, vec2(-1.2, 1.0));
        assert!(result.converged(), "stopped with {:?}", result.reason);
        assert!((result.x[0] - 1.0).abs() < 1e-6);
        assert!((result.x[1] - 1.0).abs() < 1e-6);
        assert!(result.max_residual() <= 1e-9);
    }

    #[test]
    fn scalar_equation() {
        let f = |v: &DVector<Real>| DVector::from_vec(vec![v[0].exp() - 3.0]);
        let result = TrustRegion::default().solve(&f, DVector::from_vec(vec![0.0]));
        assert!(result.converged());
        assert!((result.x[0] - 3.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn no_root_is_not_converged() {
        // x² + 1 has no real root; the iterate stalls at the minimum.
        let f = |v: &DVector<Real>| DVector::from_vec(vec![v[0] * v[0] + 1.0]);
        let result = TrustRegion::default().solve(&f, DVector::from_vec(vec![3.0]));
        assert!(!result.converged());
        assert!(result.max_residual() >= 1.0 - 1e-9);
    }

    #[test]
    fn iteration_cap_is_respected() {
        let settings = TrustRegionSettings {
            max_iterations: 3,
            time_budget: None,
            ..TrustRegionSettings::default()
        };
        let f = |v: &DVector<Real>| vec2(10.0 * (v[1] - v[0] * v[0]), 1.0 - v[0]);
        let result = TrustRegion::new(settings).solve(&f, vec2(-1.2, 1.0));
        assert!(result.iterations <= 3);
        if !result.converged() {
            assert_eq!(result.reason, TerminationReason::MaxIterations);
        }
    }

    #[test]
    fn nan_residuals_do_not_count_as_converged() {
        let f = |v: &DVector<Real>| DVector::from_vec(vec![(v[0] - 1.0).sqrt()]);
        let result = TrustRegion::default().solve(&f, DVector::from_vec(vec![-4.0]));
        assert!(!result.converged());
    }
}
