//! Default plot range for each family.
//!
//! Used when an explorer starts without an explicit range, on reset, and
//! after the quantile setter has moved the parameters.

use dx_core::Real;

use crate::family::Family;
use crate::params::unpack;

/// The default x range for `family` at `params`.
///
/// Returns `None` when the parameters are invalid and no finite, ordered
/// range exists; callers then keep whatever range they had.
pub fn default_range(family: Family, params: &[Real]) -> Option<(Real, Real)> {
    let ppf = |p: Real| family.ppf(p, params);
    let central = |lo: Real, hi: Real| (ppf(lo), ppf(hi));
    let snapped = |lo: Real, hi: Real| {
        let (x1, x2) = central(lo, hi);
        if x1 < (x2 - x1) / 10.0 {
            (0.0, x2)
        } else {
            (x1, x2)
        }
    };

    let (start, end) = match family {
        Family::Bernoulli => (-0.2, 1.2),
        Family::Categorical => (-0.25, 4.25),
        Family::BetaBinomial => {
            let [n] = unpack(params);
            (-1.0, n + 1.0)
        }
        Family::Binomial => {
            let [n] = unpack(params);
            if n < 50.0 {
                (-1.0, n + 1.0)
            } else {
                central(0.001, 0.999)
            }
        }
        Family::DiscreteUniform => {
            let [low, high] = unpack(params);
            (low - 1.0, high + 1.0)
        }
        Family::Geometric => (-1.0, ppf(0.999)),
        Family::Hypergeometric => {
            let [n, a, b] = unpack(params);
            ((n - b).max(0.0) - 1.0, n.min(a) + 1.0)
        }
        Family::NegativeBinomial
        | Family::NegativeBinomialMuPhi
        | Family::NegativeBinomialRB
        | Family::Poisson
        | Family::Normal => central(0.001, 0.999),
        Family::Beta => (0.0, 1.0),
        // Heavy tails: stop at the central 95%.
        Family::Cauchy => central(0.025, 0.975),
        Family::Exponential => (0.0, ppf(0.999)),
        Family::Gamma | Family::Weibull => snapped(0.001, 0.999),
        Family::InverseGamma | Family::LogNormal => snapped(0.001, 0.99),
        Family::HalfCauchy => {
            let [mu] = unpack(params);
            (mu, ppf(0.9))
        }
        Family::HalfNormal => {
            let [mu] = unpack(params);
            (mu, ppf(0.999))
        }
        Family::HalfStudentT => {
            let [_, mu] = unpack(params);
            (mu, ppf(0.999))
        }
        Family::Pareto => {
            // Until the density falls to 1% of its peak.
            let [y_min, alpha] = unpack(params);
            (y_min, (y_min.ln() - (0.01 as Real).ln() / (1.0 + alpha)).exp())
        }
        Family::StudentT => {
            let [nu] = unpack(params);
            let tail = if nu < 2.0 {
                0.05
            } else if nu < 4.0 {
                0.01
            } else if nu < 10.0 {
                0.005
            } else {
                0.001
            };
            central(tail, 1.0 - tail)
        }
        Family::Uniform => {
            let [alpha, beta] = unpack(params);
            if beta <= alpha {
                (0.0, 1.0)
            } else {
                let pad = 0.1 * (beta - alpha);
                (alpha - pad, beta + pad)
            }
        }
    };

    (start.is_finite() && end.is_finite() && start < end).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(f: Family, params: &[Real]) -> (Real, Real) {
        default_range(f, params).unwrap()
    }

    #[test]
    fn fixed_ranges() {
        assert_eq!(range(Family::Bernoulli, &[0.3]), (-0.2, 1.2));
        assert_eq!(range(Family::Categorical, &[0.2, 0.3, 0.1]), (-0.25, 4.25));
        assert_eq!(range(Family::Beta, &[2.0, 5.0]), (0.0, 1.0));
        assert_eq!(range(Family::Binomial, &[10.0, 0.3]), (-1.0, 11.0));
        assert_eq!(range(Family::DiscreteUniform, &[2.0, 7.0]), (1.0, 8.0));
        assert_eq!(range(Family::Hypergeometric, &[10.0, 4.0, 8.0]), (1.0, 5.0));
    }

    #[test]
    fn normal_spans_central_quantiles() {
        let (a, b) = range(Family::Normal, &[0.0, 1.0]);
        assert!((a + 3.090232).abs() < 1e-5, "got {a}");
        assert!((b - 3.090232).abs() < 1e-5, "got {b}");
    }

    #[test]
    fn gamma_start_snaps_to_zero() {
        let (a, b) = range(Family::Gamma, &[2.0, 1.0]);
        assert_eq!(a, 0.0);
        assert!(b > 9.0 && b < 9.5, "got {b}");
        // A narrow, far-from-zero gamma keeps its lower quantile.
        let (a, _) = range(Family::Gamma, &[400.0, 1.0]);
        assert!(a > 300.0, "got {a}");
    }

    #[test]
    fn pareto_and_uniform() {
        let (a, b) = range(Family::Pareto, &[1.0, 1.0]);
        assert_eq!(a, 1.0);
        assert!((b - 10.0).abs() < 1e-9, "got {b}");
        assert_eq!(range(Family::Uniform, &[0.0, 10.0]), (-1.0, 11.0));
        assert_eq!(range(Family::Uniform, &[3.0, 1.0]), (0.0, 1.0));
    }

    #[test]
    fn student_t_tail_depends_on_nu() {
        let (_, heavy) = range(Family::StudentT, &[1.5, 0.0, 1.0]);
        let (_, light) = range(Family::StudentT, &[30.0, 0.0, 1.0]);
        assert!(heavy > 0.0 && light > 0.0);
        // ν = 30 at 0.999 sits near 3.39.
        assert!((light - 3.385).abs() < 0.01, "got {light}");
    }

    #[test]
    fn half_families_start_at_location() {
        let (a, b) = range(Family::HalfNormal, &[2.0, 1.0]);
        assert_eq!(a, 2.0);
        assert!(b > 5.0, "got {b}");
        let (a, _) = range(Family::HalfStudentT, &[3.0, -1.0, 1.0]);
        assert_eq!(a, -1.0);
    }

    #[test]
    fn invalid_parameters_give_none() {
        assert!(default_range(Family::Normal, &[0.0, -1.0]).is_none());
        assert!(default_range(Family::Gamma, &[Real::NAN, 1.0]).is_none());
    }

    #[test]
    fn every_default_configuration_has_a_range() {
        for f in Family::ALL {
            let params = f.spec().default_params();
            assert!(default_range(f, &params).is_some(), "{f}");
        }
    }
}
