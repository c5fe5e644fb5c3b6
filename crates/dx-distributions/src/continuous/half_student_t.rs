//! Half-Student-t distribution: a Student-t folded at its location μ.

use dx_core::Real;
use dx_math::special::regularized_incomplete_beta;

use super::{is_probability, positive, student_t};
use crate::params::unpack;

fn valid(nu: Real, mu: Real, sigma: Real) -> bool {
    positive(nu) && !mu.is_nan() && positive(sigma)
}

/// Twice the Student-t density above μ, zero below.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [nu, mu, sigma] = unpack(params);
    if !valid(nu, mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x < mu {
        return 0.0;
    }
    2.0 * student_t::pdf(x, params)
}

/// `1 − I(ν / (y² + ν); ν/2, ½)` above μ, zero below.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [nu, mu, sigma] = unpack(params);
    if !valid(nu, mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x <= mu {
        return 0.0;
    }
    if x == Real::INFINITY {
        return 1.0;
    }
    if nu == Real::INFINITY {
        return 2.0 * student_t::cdf(x, params) - 1.0;
    }
    let y = (x - mu) / sigma;
    1.0 - regularized_incomplete_beta(nu / (y * y + nu), 0.5 * nu, 0.5)
}

/// The Student-t quantile at `(1 + p) / 2`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [nu, mu, sigma] = unpack(params);
    if !is_probability(p) || !valid(nu, mu, sigma) {
        return Real::NAN;
    }
    if p == 0.0 {
        return mu;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    student_t::ppf((1.0 + p) / 2.0, params)
}

/// `[μ, ∞)`.
pub fn support(params: &[Real]) -> (Real, Real) {
    let [_, mu] = unpack(params);
    (mu, Real::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_of_freedom_is_half_cauchy() {
        let p = [1.0, 0.5, 2.0];
        for &x in &[0.7, 1.5, 4.0, 20.0] {
            let a = cdf(x, &p);
            let b = super::super::half_cauchy::cdf(x, &[0.5, 2.0]);
            assert!((a - b).abs() < 1e-6, "x={x}: {a} vs {b}");
            let a = pdf(x, &p);
            let b = super::super::half_cauchy::pdf(x, &[0.5, 2.0]);
            assert!((a - b).abs() < 1e-10, "x={x}: {a} vs {b}");
        }
        assert_eq!(pdf(0.0, &p), 0.0);
        assert_eq!(ppf(0.0, &p), 0.5);
    }
}
