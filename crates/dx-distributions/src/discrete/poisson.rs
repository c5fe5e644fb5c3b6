//! Poisson distribution with rate λ.

use dx_core::Real;
use dx_math::special::log_factorial;

use super::is_count;
use crate::params::unpack;
use crate::summation::{summed_cdf, summed_ppf, SummationSettings};

/// `λⁿ e^(−λ) / n!`.
pub fn pmf(n: Real, params: &[Real]) -> Real {
    let [lambda] = unpack(params);
    if !(lambda >= 0.0) || !is_count(n) {
        return Real::NAN;
    }
    if lambda == 0.0 {
        return if n == 0.0 { 1.0 } else { 0.0 };
    }
    (n * lambda.ln() - log_factorial(n) - lambda).exp()
}

/// Summed mass function.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    summed_cdf(pmf, support(params), x, params, &SummationSettings::default())
}

/// Smallest `n` with `F(n) ≥ p`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    summed_ppf(pmf, support(params), p, params, &SummationSettings::default())
}

/// `[0, ∞)`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (0.0, Real::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        let v = pmf(0.0, &[5.0]);
        assert!((v - 0.006_737_947).abs() < 1e-9, "got {v}");
        let c = cdf(5.0, &[5.0]);
        assert!((c - 0.615_960_655).abs() < 1e-8, "got {c}");
    }

    #[test]
    fn zero_rate_is_point_mass() {
        assert_eq!(pmf(0.0, &[0.0]), 1.0);
        assert_eq!(pmf(2.0, &[0.0]), 0.0);
        assert!(pmf(1.0, &[-1.0]).is_nan());
    }
}
