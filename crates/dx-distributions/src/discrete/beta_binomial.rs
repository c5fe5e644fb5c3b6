//! Beta-binomial distribution: `N` trials whose success probability is
//! Beta(α, β) distributed.

use dx_core::Real;
use dx_math::special::{ln_beta, ln_choice};

use super::is_count;
use crate::params::unpack;
use crate::summation::{summed_cdf, summed_ppf, SummationSettings};

/// `C(N, n) B(n + α, N − n + β) / B(α, β)`.
pub fn pmf(n: Real, params: &[Real]) -> Real {
    let [big_n, alpha, beta] = unpack(params);
    if !is_count(big_n) || !(alpha > 0.0) || !(beta > 0.0) {
        return Real::NAN;
    }
    if !is_count(n) || n > big_n {
        return Real::NAN;
    }
    (ln_choice(big_n, n) + ln_beta(n + alpha, big_n - n + beta) - ln_beta(alpha, beta)).exp()
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
