//! Student-t distribution with ν degrees of freedom, location μ, scale σ.

use std::f64::consts::{PI, SQRT_2};

use dx_core::Real;
use dx_math::{
    roots::TrustRegion,
    special::{erf_inv, log1p, log_gamma, regularized_incomplete_beta},
};
use nalgebra::DVector;

use super::{is_probability, normal, positive};
use crate::params::unpack;

fn valid(nu: Real, mu: Real, sigma: Real) -> bool {
    positive(nu) && !mu.is_nan() && positive(sigma)
}

/// CDF of the standard (μ = 0, σ = 1) distribution at `y`.
fn standard_cdf(y: Real, nu: Real) -> Real {
    let tail = 0.5 * regularized_incomplete_beta(nu / (y * y + nu), 0.5 * nu, 0.5);
    if y >= 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// `Γ((ν+1)/2) / (Γ(ν/2) √(πν) σ) (1 + y²/ν)^(−(ν+1)/2)`.
///
/// An infinite ν gives the Normal density.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [nu, mu, sigma] = unpack(params);
    if !valid(nu, mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x.is_infinite() {
        return 0.0;
    }
    if nu == Real::INFINITY {
        return normal::pdf(x, &[mu, sigma]);
    }
    let y = (x - mu) / sigma;
    (log_gamma(0.5 * (nu + 1.0)) - log_gamma(0.5 * nu) - 0.5 * (PI * nu).ln() - sigma.ln()
        - 0.5 * (nu + 1.0) * log1p(y * y / nu))
        .exp()
}

/// Incomplete-beta form, split at the centre.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [nu, mu, sigma] = unpack(params);
    if !valid(nu, mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x == Real::NEG_INFINITY {
        return 0.0;
    }
    if x == Real::INFINITY {
        return 1.0;
    }
    if nu == Real::INFINITY {
        return normal::cdf(x, &[mu, sigma]);
    }
    standard_cdf((x - mu) / sigma, nu)
}

/// Inverse CDF.
///
/// ν = 1 and ν = ∞ have closed forms. Otherwise a one-dimensional
/// trust-region solve starts from the Cauchy quantile (ν < 3) or the Normal
/// quantile. NaN if the solve does not converge.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [nu, mu, sigma] = unpack(params);
    if !is_probability(p) || !valid(nu, mu, sigma) {
        return Real::NAN;
    }
    if p == 0.0 {
        return Real::NEG_INFINITY;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }

    let guess = if nu < 3.0 {
        (PI * (p - 0.5)).tan()
    } else {
        SQRT_2 * erf_inv(2.0 * p - 1.0)
    };
    if nu == 1.0 || nu == Real::INFINITY {
        return mu + sigma * guess;
    }

    let residual = |t: &DVector<Real>| DVector::from_element(1, p - standard_cdf(t[0], nu));
    let result = TrustRegion::default().solve(&residual, DVector::from_element(1, guess));
    if result.converged() {
        mu + sigma * result.x[0]
    } else {
        Real::NAN
    }
}

/// The real line.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (Real::NEG_INFINITY, Real::INFINITY)
}
