//! Half-Cauchy distribution: a Cauchy folded at its location μ.

use std::f64::consts::PI;

use dx_core::Real;

use super::{is_probability, positive};
use crate::params::unpack;

fn valid(mu: Real, sigma: Real) -> bool {
    !mu.is_nan() && positive(sigma)
}

/// `2 / (π σ (1 + z²))` above μ, zero below.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !valid(mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x < mu {
        return 0.0;
    }
    let z = (x - mu) / sigma;
    2.0 / (PI * sigma * (1.0 + z * z))
}

/// `2 atan(z) / π` above μ, zero below.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !valid(mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x <= mu {
        0.0
    } else if x == Real::INFINITY {
        1.0
    } else {
        2.0 * ((x - mu) / sigma).atan() / PI
    }
}

/// `μ + σ tan(π p / 2)`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !is_probability(p) || !valid(mu, sigma) {
        return Real::NAN;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    mu + sigma * (PI * p / 2.0).tan()
}

/// `[μ, ∞)`.
pub fn support(params: &[Real]) -> (Real, Real) {
    let [mu] = unpack(params);
    (mu, Real::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folded_at_location() {
        assert_eq!(pdf(0.5, &[1.0, 1.0]), 0.0);
        assert_eq!(cdf(0.5, &[1.0, 1.0]), 0.0);
        assert!((cdf(3.0, &[1.0, 2.0]) - 0.5).abs() < 1e-12);
        assert!((ppf(0.5, &[1.0, 2.0]) - 3.0).abs() < 1e-12);
        assert_eq!(ppf(0.0, &[1.0, 2.0]), 1.0);
    }
}
