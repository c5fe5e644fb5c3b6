//! Binomial distribution: successes in `N` trials of probability θ.

use dx_core::Real;
use dx_math::special::{ln_choice, log1p};

use super::is_count;
use crate::params::unpack;
use crate::summation::{summed_cdf, summed_ppf, SummationSettings};

/// `C(N, n) θⁿ (1 − θ)^(N − n)`.
pub fn pmf(n: Real, params: &[Real]) -> Real {
    let [big_n, theta] = unpack(params);
    if !is_count(big_n) || !(0.0..=1.0).contains(&theta) {
        return Real::NAN;
    }
    if !is_count(n) || n > big_n {
        return Real::NAN;
    }
    if theta == 0.0 {
        return if n == 0.0 { 1.0 } else { 0.0 };
    }
    if theta == 1.0 {
        return if n == big_n { 1.0 } else { 0.0 };
    }
    (ln_choice(big_n, n) + n * theta.ln() + (big_n - n) * log1p(-theta)).exp()
}

/// Summed mass function.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    summed_cdf(pmf, support(params), x, params, &SummationSettings::default())
}

/// Smallest `n` with `F(n) ≥ p`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    summed_ppf(pmf, support(params), p, params, &SummationSettings::default())
}

/// `[0, N]`.
pub fn support(params: &[Real]) -> (Real, Real) {
    let [big_n] = unpack(params);
    (0.0, big_n)
}
