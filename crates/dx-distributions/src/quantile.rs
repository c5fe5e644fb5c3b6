//! Quantile setter: find parameters that put given quantiles at given points.
//!
//! The user supplies one `(x, p)` pair per free parameter and asks for
//! `CDF(xᵢ; θ) = pᵢ`. Families with a two-parameter location/scale or
//! power-law structure have closed forms. The others are solved with the
//! trust-region dogleg in [`dx_math::roots`], first over log-parameters so
//! positive parameters stay positive, then refined without the transform.
//!
//! Discrete families have no quantile setter.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use dx_core::{
    ensure_arg,
    errors::{Error, Result},
    Real,
};
use dx_math::roots::{RootResult, TrustRegion};
use dx_math::special::erf_inv;
use nalgebra::DVector;
use tracing::{debug, instrument, warn};

use crate::family::{Family, Kind};
use crate::params::{ParameterVector, Role};

/// Largest `|CDF(xᵢ) − pᵢ|` accepted from any solution.
pub const ROUND_TRIP_TOLERANCE: Real = 1e-6;

/// Number of `(x, p)` pairs the setter needs for `family`; 0 if unsupported.
pub fn quantile_count(family: Family) -> usize {
    match family.kind() {
        Kind::Discrete => 0,
        Kind::Continuous => family.spec().active_params().len(),
    }
}

// ── Targets ───────────────────────────────────────────────────────────────────

/// Validated quantile targets.
///
/// Holds one pair per free parameter with `0 < pᵢ < 1` and every `xᵢ`
/// inside the family's hard bounds. With two pairs, both `p` and `x` are
/// strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileTarget {
    x: Vec<Real>,
    p: Vec<Real>,
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidQuantile(message.into())
}

fn bound_text(v: Real) -> String {
    if v == Real::INFINITY {
        "∞".to_string()
    } else if v == Real::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{v}")
    }
}

/// Parse a text-box entry as a finite number.
pub fn parse_number(text: &str) -> Result<Real> {
    match text.trim().parse::<Real>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(format!("{} is not a valid number.", text.trim()))),
    }
}

impl QuantileTarget {
    /// Validate `x` and `p` for `family`.
    ///
    /// Errors carry the message shown to the user, checked in this order:
    /// each pair's probability then its point, then the ordering of two
    /// pairs. A discrete family gives [`Error::Unsupported`] and a wrong
    /// number of pairs gives [`Error::InvalidArgument`].
    pub fn new(family: Family, x: &[Real], p: &[Real]) -> Result<Self> {
        let n = quantile_count(family);
        if n == 0 {
            return Err(Error::Unsupported(format!(
                "{family} has no quantile setter"
            )));
        }
        ensure_arg!(
            x.len() == n && p.len() == n,
            "{family} takes {n} quantile pair(s), got {} x and {} p",
            x.len(),
            p.len()
        );

        let spec = family.spec();
        for (&xi, &pi) in x.iter().zip(p) {
            if !(pi > 0.0 && pi < 1.0) {
                return Err(invalid("Must have 0 < quantile < 1."));
            }
            if !(xi >= spec.hard_min && xi <= spec.hard_max) {
                return Err(invalid(format!(
                    "Must have {} ≤ {} ≤ {}.",
                    bound_text(spec.hard_min),
                    spec.var_name,
                    bound_text(spec.hard_max)
                )));
            }
        }
        if n == 2 {
            if p[0] >= p[1] {
                return Err(invalid("Lower quantile must be less than upper quantile."));
            }
            if x[0] >= x[1] {
                return Err(invalid(format!(
                    "Lower {v} must be less than upper {v}.",
                    v = spec.var_name
                )));
            }
        }

        Ok(Self {
            x: x.to_vec(),
            p: p.to_vec(),
        })
    }

    /// Parse text-box entries, then validate as [`QuantileTarget::new`].
    pub fn parse<S: AsRef<str>>(family: Family, x: &[S], p: &[S]) -> Result<Self> {
        let x = x
            .iter()
            .map(|s| parse_number(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let p = p
            .iter()
            .map(|s| parse_number(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(family, &x, &p)
    }

    /// Target points.
    pub fn x(&self) -> &[Real] {
        &self.x
    }

    /// Target probabilities.
    pub fn p(&self) -> &[Real] {
        &self.p
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a validated target.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ── Closed forms ──────────────────────────────────────────────────────────────

/// `√2 erf⁻¹(2p − 1)`, the standard normal quantile.
fn z(p: Real) -> Real {
    SQRT_2 * erf_inv(2.0 * p - 1.0)
}

fn normal_form(x: &[Real], p: &[Real]) -> [Real; 2] {
    let (c1, c2) = (z(p[0]), z(p[1]));
    let sigma = (x[1] - x[0]) / (c2 - c1);
    [x[1] - c2 * sigma, sigma]
}

fn cauchy_form(x: &[Real], p: &[Real]) -> [Real; 2] {
    let cot1 = 1.0 / (PI * p[0]).tan();
    let cot2 = 1.0 / (PI * p[1]).tan();
    let mu = (x[1] * cot1 - x[0] * cot2) / (cot1 - cot2);
    let sigma = (x[1] - x[0]) / (cot1 - cot2);
    [mu, sigma]
}

fn half_cauchy_form(x: Real, p: Real, mu: Real) -> Real {
    (x - mu) / (FRAC_PI_2 * p).tan()
}

fn half_normal_form(x: Real, p: Real, mu: Real) -> Real {
    (x - mu) / (SQRT_2 * erf_inv(p))
}

/// Parameters for the families that need no iteration, or `None`.
fn closed_form(family: Family, target: &QuantileTarget, current: &[Real]) -> Option<Vec<Real>> {
    let (x, p) = (target.x(), target.p());
    let solved = match family {
        Family::Normal => normal_form(x, p).to_vec(),
        Family::LogNormal => normal_form(&[x[0].ln(), x[1].ln()], p).to_vec(),
        Family::Cauchy => cauchy_form(x, p).to_vec(),
        Family::Uniform => {
            let alpha = (p[1] * x[0] - p[0] * x[1]) / (p[1] - p[0]);
            vec![alpha, alpha + (x[1] - x[0]) / (p[1] - p[0])]
        }
        Family::Weibull => {
            let loglog1 = (-(-p[0]).ln_1p()).ln();
            let loglog2 = (-(-p[1]).ln_1p()).ln();
            let alpha = (loglog2 - loglog1) / (x[1].ln() - x[0].ln());
            vec![alpha, (x[1].ln() - loglog2 / alpha).exp()]
        }
        Family::Pareto => {
            let (l1, l2) = ((-p[0]).ln_1p(), (-p[1]).ln_1p());
            let alpha = (l1 - l2) / (x[1].ln() - x[0].ln());
            vec![(l2 / alpha + x[1].ln()).exp(), alpha]
        }
        Family::Exponential => vec![-(-p[0]).ln_1p() / x[0]],
        Family::HalfCauchy => vec![current[0], half_cauchy_form(x[0], p[0], current[0])],
        Family::HalfNormal => vec![current[0], half_normal_form(x[0], p[0], current[0])],
        Family::StudentT if current[0] == 1.0 => {
            let [mu, sigma] = cauchy_form(x, p);
            vec![current[0], mu, sigma]
        }
        Family::StudentT if current[0] == Real::INFINITY => {
            let [mu, sigma] = normal_form(x, p);
            vec![current[0], mu, sigma]
        }
        Family::HalfStudentT if current[0] == 1.0 => {
            vec![current[0], current[1], half_cauchy_form(x[0], p[0], current[1])]
        }
        Family::HalfStudentT if current[0] == Real::INFINITY => {
            vec![current[0], current[1], half_normal_form(x[0], p[0], current[1])]
        }
        _ => return None,
    };
    Some(solved)
}

// ── Iterative solves ──────────────────────────────────────────────────────────

/// `CDF(xᵢ; θ) − pᵢ` with the free entries of `θ` taken from an unknown
/// vector, some of them through `exp`.
struct Residuals<'a> {
    family: Family,
    x: &'a [Real],
    p: &'a [Real],
    base: &'a [Real],
    free: &'a [usize],
    logged: &'a [bool],
}

impl Residuals<'_> {
    fn params(&self, u: &DVector<Real>) -> Vec<Real> {
        let mut params = self.base.to_vec();
        for (k, &i) in self.free.iter().enumerate() {
            params[i] = if self.logged[k] { u[k].exp() } else { u[k] };
        }
        params
    }

    fn eval(&self, u: &DVector<Real>) -> DVector<Real> {
        let params = self.params(u);
        DVector::from_iterator(
            self.x.len(),
            self.x
                .iter()
                .zip(self.p)
                .map(|(&x, &p)| self.family.cdf(x, &params) - p),
        )
    }

    fn with_logged<'b>(&'b self, logged: &'b [bool]) -> Residuals<'b> {
        Residuals {
            family: self.family,
            x: self.x,
            p: self.p,
            base: self.base,
            free: self.free,
            logged,
        }
    }
}

fn non_convergence(result: &RootResult) -> Error {
    Error::NonConvergence {
        iterations: result.iterations,
        residual: result.max_residual(),
    }
}

/// Solve from `guess` in the transformed space, then optionally solve again
/// untransformed from that answer and keep whichever has the smaller
/// residual norm. Returns the full parameter vector.
fn solve_staged(problem: &Residuals<'_>, guess: Vec<Real>, refine: bool) -> Result<Vec<Real>> {
    let solver = TrustRegion::default();
    let f = |u: &DVector<Real>| problem.eval(u);
    let first = solver.solve(&f, DVector::from_vec(guess));
    if !first.converged() {
        return Err(non_convergence(&first));
    }
    let coarse = problem.params(&first.x);
    if !refine {
        return Ok(coarse);
    }

    let plain = vec![false; problem.free.len()];
    let untransformed = problem.with_logged(&plain);
    let g = |u: &DVector<Real>| untransformed.eval(u);
    let start = DVector::from_iterator(problem.free.len(), problem.free.iter().map(|&i| coarse[i]));
    let second = solver.solve(&g, start);
    if second.converged() && second.residuals.norm() < first.residuals.norm() {
        debug!(iterations = second.iterations, "refined without transform");
        Ok(untransformed.params(&second.x))
    } else {
        Ok(coarse)
    }
}

/// Gamma with rate parameter, solved on points rescaled by the upper one.
fn solve_gamma(x: &[Real], p: &[Real]) -> Result<Vec<Real>> {
    let scale = x[1];
    let rescaled = [x[0] / scale, 1.0];
    let base = [Real::NAN, Real::NAN];
    let problem = Residuals {
        family: Family::Gamma,
        x: &rescaled,
        p,
        base: &base,
        free: &[0, 1],
        logged: &[true, true],
    };
    let solved = solve_staged(&problem, vec![0.75, 0.75], true)?;
    Ok(vec![solved[0], solved[1] / scale])
}

fn iterative(family: Family, target: &QuantileTarget, current: &[Real]) -> Result<Vec<Real>> {
    let (x, p) = (target.x(), target.p());
    match family {
        Family::Gamma => solve_gamma(x, p),
        Family::InverseGamma => {
            // 1/X is gamma distributed, with the tail probabilities swapped.
            solve_gamma(&[1.0 / x[1], 1.0 / x[0]], &[1.0 - p[1], 1.0 - p[0]])
        }
        Family::Beta => {
            let base = [Real::NAN, Real::NAN];
            let problem = Residuals {
                family,
                x,
                p,
                base: &base,
                free: &[0, 1],
                logged: &[true, true],
            };
            solve_staged(&problem, vec![1.0, 1.0], false)
        }
        Family::StudentT => {
            let nu = current[0];
            let [mu, sigma] = if nu < 3.0 {
                cauchy_form(x, p)
            } else {
                normal_form(x, p)
            };
            let base = [nu, Real::NAN, Real::NAN];
            let problem = Residuals {
                family,
                x,
                p,
                base: &base,
                free: &[1, 2],
                logged: &[false, true],
            };
            solve_staged(&problem, vec![mu, sigma.ln()], true)
        }
        Family::HalfStudentT => {
            let (nu, mu) = (current[0], current[1]);
            let sigma = if nu < 3.0 {
                half_cauchy_form(x[0], p[0], mu)
            } else {
                half_normal_form(x[0], p[0], mu)
            };
            let base = [nu, mu, Real::NAN];
            let problem = Residuals {
                family,
                x,
                p,
                base: &base,
                free: &[2],
                logged: &[true],
            };
            solve_staged(&problem, vec![sigma.ln()], true)
        }
        _ => Err(Error::Unsupported(format!(
            "{family} has no quantile setter"
        ))),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Largest `|CDF(xᵢ; params) − pᵢ|`; NaN if any term is NaN.
fn round_trip_error(family: Family, target: &QuantileTarget, params: &[Real]) -> Real {
    target
        .x()
        .iter()
        .zip(target.p())
        .map(|(&x, &p)| (family.cdf(x, params) - p).abs())
        .fold(0.0, |acc: Real, r| {
            if acc.is_nan() || r.is_nan() {
                Real::NAN
            } else {
                acc.max(r)
            }
        })
}

fn admissible(family: Family, params: &[Real]) -> bool {
    family.spec().params.iter().zip(params).all(|(spec, &v)| {
        let sign_ok = spec.role == Role::Location || v > 0.0;
        !v.is_nan() && sign_ok && spec.admits(v)
    })
}

/// Parameters matching `target`, holding fixed parameters at their values
/// in `current`.
///
/// Fails with [`Error::NonConvergence`] when the solver stops early or the
/// answer leaves the parameter domain or misses a target by more than
/// [`ROUND_TRIP_TOLERANCE`]; the caller then keeps its old parameters.
#[instrument(skip(target, current), fields(pairs = target.len()))]
pub fn set_quantiles(
    family: Family,
    target: &QuantileTarget,
    current: &[Real],
) -> Result<ParameterVector> {
    let n = family.spec().n_params();
    ensure_arg!(
        current.len() == n,
        "{family} takes {n} parameters, got {}",
        current.len()
    );

    let solved = match closed_form(family, target, current) {
        Some(params) => Ok(params),
        None => iterative(family, target, current),
    }
    .and_then(|params| {
        let error = round_trip_error(family, target, &params);
        if admissible(family, &params) && error <= ROUND_TRIP_TOLERANCE {
            Ok(params)
        } else {
            Err(Error::NonConvergence {
                iterations: 0,
                residual: error,
            })
        }
    });

    match solved {
        Ok(params) => {
            debug!(?params, "quantiles matched");
            Ok(ParameterVector::new(params))
        }
        Err(e) => {
            warn!(error = %e, "quantile setter failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(family: Family, x: &[Real], p: &[Real], current: &[Real]) -> Vec<Real> {
        let target = QuantileTarget::new(family, x, p).unwrap();
        set_quantiles(family, &target, current).unwrap().into_inner()
    }

    fn assert_round_trip(family: Family, x: &[Real], p: &[Real], params: &[Real]) {
        for (&xi, &pi) in x.iter().zip(p) {
            let c = family.cdf(xi, params);
            assert!((c - pi).abs() < 1e-6, "{family}: cdf({xi}) = {c}, want {pi}");
        }
    }

    #[test]
    fn counts_follow_free_parameters() {
        assert_eq!(quantile_count(Family::Normal), 2);
        assert_eq!(quantile_count(Family::Exponential), 1);
        assert_eq!(quantile_count(Family::HalfNormal), 1);
        assert_eq!(quantile_count(Family::HalfStudentT), 1);
        assert_eq!(quantile_count(Family::StudentT), 2);
        assert_eq!(quantile_count(Family::Poisson), 0);
    }

    #[test]
    fn validation_messages() {
        let msg = |r: Result<QuantileTarget>| r.unwrap_err().to_string();
        assert_eq!(
            msg(QuantileTarget::new(Family::Normal, &[0.0, 1.0], &[0.0, 0.5])),
            "Must have 0 < quantile < 1."
        );
        assert_eq!(
            msg(QuantileTarget::new(Family::Normal, &[0.0, 1.0], &[0.6, 0.5])),
            "Lower quantile must be less than upper quantile."
        );
        assert_eq!(
            msg(QuantileTarget::new(Family::Normal, &[2.0, 1.0], &[0.1, 0.5])),
            "Lower y must be less than upper y."
        );
        assert_eq!(
            msg(QuantileTarget::new(Family::Beta, &[0.2, 1.5], &[0.1, 0.5])),
            "Must have 0 ≤ θ ≤ 1."
        );
        assert_eq!(
            msg(QuantileTarget::new(Family::Gamma, &[-1.0, 1.5], &[0.1, 0.5])),
            "Must have 0 ≤ y ≤ ∞."
        );
        assert_eq!(
            msg(QuantileTarget::parse(Family::Normal, &["abc", "1"], &["0.1", "0.5"])),
            "abc is not a valid number."
        );
    }

    #[test]
    fn discrete_and_miscounted_targets_are_rejected() {
        assert!(matches!(
            QuantileTarget::new(Family::Poisson, &[1.0], &[0.5]),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            QuantileTarget::new(Family::Normal, &[1.0], &[0.5]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn normal_closed_form() {
        let params = solve(Family::Normal, &[-1.0, 3.0], &[0.1, 0.9], &[0.0, 1.0]);
        assert!((params[0] - 1.0).abs() < 1e-9, "got {params:?}");
        assert_round_trip(Family::Normal, &[-1.0, 3.0], &[0.1, 0.9], &params);
    }

    #[test]
    fn cauchy_closed_form_round_trips() {
        let (x, p) = ([0.5, 4.0], [0.2, 0.7]);
        let params = solve(Family::Cauchy, &x, &p, &[0.0, 1.0]);
        assert!(params[1] > 0.0, "got {params:?}");
        assert_round_trip(Family::Cauchy, &x, &p, &params);
    }

    #[test]
    fn closed_forms_round_trip() {
        let cases: [(Family, &[Real], &[Real], &[Real]); 6] = [
            (Family::LogNormal, &[0.5, 3.0], &[0.05, 0.95], &[0.0, 1.0]),
            (Family::Uniform, &[1.0, 2.0], &[0.25, 0.75], &[0.0, 1.0]),
            (Family::Weibull, &[0.5, 2.0], &[0.1, 0.8], &[1.0, 1.0]),
            (Family::Pareto, &[2.0, 5.0], &[0.3, 0.9], &[1.0, 2.0]),
            (Family::Exponential, &[2.0], &[0.5], &[1.0]),
            (Family::HalfNormal, &[3.0], &[0.9], &[1.0, 1.0]),
        ];
        for (family, x, p, current) in cases {
            let params = solve(family, x, p, current);
            assert_round_trip(family, x, p, &params);
        }
    }

    #[test]
    fn half_families_keep_location() {
        let params = solve(Family::HalfCauchy, &[3.0], &[0.5], &[1.0, 1.0]);
        assert_eq!(params[0], 1.0);
        assert!((params[1] - 2.0).abs() < 1e-12, "got {params:?}");
        let err = set_quantiles(
            Family::HalfNormal,
            &QuantileTarget::new(Family::HalfNormal, &[0.5], &[0.5]).unwrap(),
            &[1.0, 1.0],
        )
        .unwrap_err();
        assert!(matches!(err, Error::NonConvergence { .. }), "got {err:?}");
    }

    #[test]
    fn gamma_and_inverse_gamma() {
        let (x, p) = ([1.0, 5.0], [0.1, 0.9]);
        let params = solve(Family::Gamma, &x, &p, &[2.0, 1.0]);
        assert_round_trip(Family::Gamma, &x, &p, &params);
        let params = solve(Family::InverseGamma, &x, &p, &[3.0, 2.0]);
        assert_round_trip(Family::InverseGamma, &x, &p, &params);
    }

    #[test]
    fn beta_from_log_guess() {
        let (x, p) = ([0.2, 0.6], [0.25, 0.75]);
        let params = solve(Family::Beta, &x, &p, &[2.0, 5.0]);
        assert_round_trip(Family::Beta, &x, &p, &params);
    }

    #[test]
    fn student_t_holds_nu() {
        let (x, p) = ([-1.0, 4.0], [0.1, 0.8]);
        for nu in [1.0, 2.5, 5.0, Real::INFINITY] {
            let params = solve(Family::StudentT, &x, &p, &[nu, 0.0, 1.0]);
            assert_eq!(params[0], nu);
            assert_round_trip(Family::StudentT, &x, &p, &params);
        }
    }

    #[test]
    fn half_student_t_holds_nu_and_mu() {
        for nu in [1.0, 2.0, 7.0] {
            let params = solve(Family::HalfStudentT, &[2.0], &[0.6], &[nu, 0.5, 1.0]);
            assert_eq!(params[..2], [nu, 0.5]);
            assert_round_trip(Family::HalfStudentT, &[2.0], &[0.6], &params);
        }
    }

    #[test]
    fn wrong_parameter_count_is_an_error() {
        let target = QuantileTarget::new(Family::Normal, &[0.0, 1.0], &[0.2, 0.8]).unwrap();
        assert!(matches!(
            set_quantiles(Family::Normal, &target, &[0.0]),
            Err(Error::InvalidArgument(_))
        ));
    }
}
