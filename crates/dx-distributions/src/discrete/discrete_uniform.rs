//! Discrete uniform distribution on the integers `low..=high`.

use dx_core::Real;

use super::is_integer;
use crate::params::unpack;
use crate::summation::{summed_cdf, summed_ppf, SummationSettings};

fn bounds(params: &[Real]) -> Option<(Real, Real)> {
    let [low, high] = unpack(params);
    (is_integer(low) && is_integer(high) && low <= high).then_some((low, high))
}

/// `1 / (high − low + 1)` on the support.
pub fn pmf(n: Real, params: &[Real]) -> Real {
    match bounds(params) {
        Some((low, high)) if is_integer(n) && n >= low && n <= high => 1.0 / (high - low + 1.0),
        _ => Real::NAN,
    }
}

/// Summed mass function.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    summed_cdf(pmf, support(params), x, params, &SummationSettings::default())
}

/// Smallest `n` with `F(n) ≥ p`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    summed_ppf(pmf, support(params), p, params, &SummationSettings::default())
}

/// `[low, high]`, NaN when `low > high`.
pub fn support(params: &[Real]) -> (Real, Real) {
    bounds(params).unwrap_or((Real::NAN, Real::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_mass() {
        assert!((pmf(-2.0, &[-2.0, 2.0]) - 0.2).abs() < 1e-15);
        assert!(pmf(3.0, &[-2.0, 2.0]).is_nan());
        assert!(pmf(0.0, &[2.0, -2.0]).is_nan());
        assert!((cdf(0.0, &[-2.0, 2.0]) - 0.6).abs() < 1e-12);
        assert_eq!(ppf(0.5, &[-2.0, 2.0]), 0.0);
    }
}
