//! Hypergeometric distribution: white balls among `N` drawn without
//! replacement from an urn of `a` white and `b` black balls.

use dx_core::Real;
use dx_math::special::ln_choice;

use super::{is_count, is_integer};
use crate::params::unpack;
use crate::summation::{summed_cdf, summed_ppf, SummationSettings};

/// `C(a, n) C(b, N − n) / C(a + b, N)`.
pub fn pmf(n: Real, params: &[Real]) -> Real {
    let [big_n, a, b] = unpack(params);
    let (lower, upper) = support(params);
    if lower.is_nan() || !is_integer(n) || n < lower || n > upper {
        return Real::NAN;
    }
    (ln_choice(a, n) + ln_choice(b, big_n - n) - ln_choice(a + b, big_n)).exp()
}

/// Summed mass function.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    summed_cdf(pmf, support(params), x, params, &SummationSettings::default())
}

/// Smallest `n` with `F(n) ≥ p`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    summed_ppf(pmf, support(params), p, params, &SummationSettings::default())
}

/// `[max(0, N − b), min(N, a)]`, NaN unless `N ≤ a + b` and all are counts.
pub fn support(params: &[Real]) -> (Real, Real) {
    let [big_n, a, b] = unpack(params);
    if !is_count(big_n) || !is_count(a) || !is_count(b) || big_n > a + b {
        return (Real::NAN, Real::NAN);
    }
    ((big_n - b).max(0.0), big_n.min(a))
}
