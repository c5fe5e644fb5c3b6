//! Inverse-gamma distribution: `1/Y` for `Y ~ Gamma(α, β)`.

use dx_core::Real;
use dx_math::special::{gamma_inc_upper, log_gamma};

use super::{gamma, is_probability, positive};
use crate::params::unpack;

/// `β^α x^(−α−1) e^(−β/x) / Γ(α)`.
pub fn pdf(x: Real, params: &[Real]) -> Real {
    let [alpha, beta] = unpack(params);
    if !positive(alpha) || !positive(beta) || x.is_nan() || x < 0.0 {
        return Real::NAN;
    }
    if x == 0.0 || x == Real::INFINITY {
        return 0.0;
    }
    (alpha * beta.ln() - (alpha + 1.0) * x.ln() - beta / x - log_gamma(alpha)).exp()
}

/// `Q(α, β/x)`, the regularized upper incomplete gamma function.
pub fn cdf(x: Real, params: &[Real]) -> Real {
    let [alpha, beta] = unpack(params);
    if !positive(alpha) || !positive(beta) || x.is_nan() {
        return Real::NAN;
    }
    if x <= 0.0 {
        0.0
    } else if x == Real::INFINITY {
        1.0
    } else {
        gamma_inc_upper(alpha, beta / x)
    }
}

/// `1 / Gamma.ppf(1 − p)`.
pub fn ppf(p: Real, params: &[Real]) -> Real {
    if !is_probability(p) {
        return Real::NAN;
    }
    let [alpha, beta] = unpack(params);
    if !positive(alpha) || !positive(beta) {
        return Real::NAN;
    }
    if p == 0.0 {
        return 0.0;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    1.0 / gamma::ppf(1.0 - p, params)
}

/// `[0, ∞)`.
pub fn support(_params: &[Real]) -> (Real, Real) {
    (0.0, Real::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_gamma() {
        let p = [3.0, 2.0];
        let x: Real = 0.8;
        let expected = 1.0 - gamma::cdf(1.0 / x, &p);
        assert!((cdf(x, &p) - expected).abs() < 1e-10);
        assert_eq!(pdf(0.0, &p), 0.0);
        assert!(pdf(-1.0, &p).is_nan());
    }
}
