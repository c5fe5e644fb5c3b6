//! Half-normal distribution: a Normal folded at its location μ.

use std::f64::consts::{FRAC_1_SQRT_2, PI, SQRT_2};

use dx_core::Real;
use dx_math::special::{erf, erf_inv};

use super::{is_probability, positive};
use crate::params::unpack;

fn valid(mu: Real, sigma: Real) -> bool {
    !mu.is_nan() && positive(sigma)
}

/// `√(2/π) e^(−z²/2) / σ` above μ, zero below.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !valid(mu, sigma) || x.is_nan() {
        return Real::NAN;
    }
    if x < mu {
        return 0.0;
    }
    let z = (x - mu) / sigma;
    (2.0 / PI).sqrt() / sigma * (-0.5 * z * z).exp()
}

/// `erf(z / √2)` above μ, zero below.
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
        erf((x - mu) / sigma * FRAC_1_SQRT_2)
    }
}

/// `μ + √2 σ erf⁻¹(p)`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    let [mu, sigma] = unpack(params);
    if !is_probability(p) || !valid(mu, sigma) {
        return Real::NAN;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    mu + SQRT_2 * sigma * erf_inv(p)
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
    fn twice_the_normal_density() {
        let v = pdf(0.0, &[0.0, 1.0]);
        assert!((v - 0.797_884_560_802_865_4).abs() < 1e-12, "got {v}");
        assert_eq!(pdf(-0.1, &[0.0, 1.0]), 0.0);
        // 68.27% of a standard half-normal lies below one σ.
        assert!((cdf(1.0, &[0.0, 1.0]) - 0.682_689_49).abs() < 1e-6);
    }
}
