//! Whole-family checks of the evaluators: normalization, monotone CDFs,
//! CDF limits, quantile consistency and the degenerate inputs.

use dx_distributions::{default_range, Family, Kind};
use dx_math::integrals::{Integrator, MidpointIntegral};
use proptest::prelude::*;

fn defaults(f: Family) -> Vec<f64> {
    f.spec().default_params().into_inner()
}

// ───────────────────────── normalization ─────────────────────────

#[test]
fn continuous_densities_integrate_to_one() {
    let integrator = MidpointIntegral::new(100_000);
    for f in Family::ALL.iter().copied().filter(|f| f.kind() == Kind::Continuous) {
        let params = defaults(f);
        let (lower, upper) = f.support(&params);
        let a = f.ppf(1e-4, &params).max(lower);
        let b = f.ppf(1.0 - 1e-4, &params).min(upper);
        let mass = integrator
            .integrate(|x| f.prob(x, &params), a, b)
            .unwrap();
        let tails = f.cdf(a, &params) + (1.0 - f.cdf(b, &params));
        assert!((mass + tails - 1.0).abs() < 1e-3, "{f}: mass {mass}, tails {tails}");
    }
}

#[test]
fn mass_functions_sum_to_one() {
    for f in Family::ALL.iter().copied().filter(|f| f.is_discrete()) {
        let params = defaults(f);
        let (lower, upper) = f.support(&params);
        let mut total = 0.0;
        let mut n = lower;
        while n <= upper && n < lower + 10_000.0 {
            let p = f.prob(n, &params);
            if !p.is_nan() {
                total += p;
            }
            n += 1.0;
        }
        assert!((total - 1.0).abs() < 1e-3, "{f}: total {total}");
    }
}

#[test]
fn integral_of_density_matches_cdf_difference() {
    let integrator = MidpointIntegral::new(20_000);
    let cases: [(Family, &[f64], f64, f64); 4] = [
        (Family::Gamma, &[3.0, 2.0], 0.5, 2.0),
        (Family::StudentT, &[4.0, 1.0, 2.0], -1.0, 3.0),
        (Family::Weibull, &[2.0, 1.5], 0.2, 1.0),
        (Family::InverseGamma, &[3.0, 2.0], 0.5, 1.5),
    ];
    for (f, params, a, b) in cases {
        let mass = integrator.integrate(|x| f.prob(x, params), a, b).unwrap();
        let diff = f.cdf(b, params) - f.cdf(a, params);
        assert!((mass - diff).abs() < 1e-6, "{f}: ∫ = {mass}, ΔF = {diff}");
    }
}

// ───────────────────────── limits ─────────────────────────

#[test]
fn cdf_runs_from_zero_to_one() {
    for f in Family::ALL {
        let params = defaults(f);
        let lo = f.cdf(f64::NEG_INFINITY, &params);
        let hi = f.cdf(f64::INFINITY, &params);
        assert!(lo.abs() < 1e-12, "{f}: F(-∞) = {lo}");
        assert!((hi - 1.0).abs() < 1e-12, "{f}: F(∞) = {hi}");
    }
}

#[test]
fn discrete_cdf_is_zero_below_support() {
    for f in Family::ALL.iter().copied().filter(|f| f.is_discrete()) {
        let params = defaults(f);
        let (lower, _) = f.support(&params);
        assert_eq!(f.cdf(lower - 1.0, &params), 0.0, "{f}");
    }
}

// ───────────────────────── quantiles ─────────────────────────

#[test]
fn continuous_ppf_inverts_cdf() {
    for f in Family::ALL.iter().copied().filter(|f| f.kind() == Kind::Continuous) {
        let params = defaults(f);
        for p in [0.001, 0.01, 0.1, 0.5, 0.9, 0.99, 0.999] {
            let x = f.ppf(p, &params);
            let back = f.cdf(x, &params);
            assert!((back - p).abs() < 1e-6, "{f}: F(F⁻¹({p})) = {back}");
        }
    }
}

#[test]
fn discrete_ppf_is_smallest_point_reaching_p() {
    for f in Family::ALL.iter().copied().filter(|f| f.is_discrete()) {
        let params = defaults(f);
        for p in [0.01, 0.1, 0.37, 0.5, 0.9, 0.99] {
            let n = f.ppf(p, &params);
            assert!(n.is_finite(), "{f}: F⁻¹({p}) = {n}");
            assert!(f.cdf(n, &params) >= p - 1e-9, "{f}: F({n}) < {p}");
            assert!(f.cdf(n - 1.0, &params) < p + 1e-9, "{f}: F({n} - 1) ≥ {p}");
        }
    }
}

#[test]
fn ppf_rejects_non_probabilities() {
    for f in Family::ALL {
        let params = defaults(f);
        assert!(f.ppf(-0.1, &params).is_nan(), "{f}");
        assert!(f.ppf(1.1, &params).is_nan(), "{f}");
        assert!(f.ppf(f64::NAN, &params).is_nan(), "{f}");
    }
}

// ───────────────────────── concrete values ─────────────────────────

#[test]
fn standard_normal_at_zero() {
    let pdf = Family::Normal.prob(0.0, &[0.0, 1.0]);
    assert!((pdf - 0.398_942).abs() < 1e-6, "got {pdf}");
    assert_eq!(Family::Normal.cdf(0.0, &[0.0, 1.0]), 0.5);
}

#[test]
fn poisson_five() {
    let pmf = Family::Poisson.prob(0.0, &[5.0]);
    assert!((pmf - 0.006_737_9).abs() < 1e-7, "got {pmf}");
    let cdf = Family::Poisson.cdf(5.0, &[5.0]);
    assert!((cdf - 0.615_961).abs() < 1e-6, "got {cdf}");
}

#[test]
fn binomial_three_halves_accumulates() {
    let acc = Family::Binomial.cdf_on_lattice(
        &[0.0, 1.0, 2.0, 3.0],
        &[3.0, 0.5],
        &Default::default(),
    );
    let expected = [0.125, 0.5, 0.875, 1.0];
    for (got, want) in acc.values.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

// ───────────────────────── degenerate inputs ─────────────────────────

#[test]
fn bernoulli_off_lattice_is_nan() {
    assert!(Family::Bernoulli.prob(0.5, &[0.5]).is_nan());
}

#[test]
fn binomial_beyond_trials_is_nan() {
    assert!(Family::Binomial.prob(5.0, &[3.0, 0.5]).is_nan());
}

#[test]
fn uniform_with_reversed_bounds_is_nan_everywhere() {
    for x in [-1.0, 2.0, 3.5, 5.0, 8.0] {
        assert!(Family::Uniform.prob(x, &[5.0, 2.0]).is_nan(), "pdf at {x}");
        assert!(Family::Uniform.cdf(x, &[5.0, 2.0]).is_nan(), "cdf at {x}");
    }
}

#[test]
fn categorical_with_negative_implied_probability_is_nan() {
    let params = [0.5, 0.6, 0.1];
    for x in [1.0, 2.0, 3.0, 4.0] {
        assert!(Family::Categorical.prob(x, &params).is_nan(), "pmf at {x}");
        assert!(Family::Categorical.cdf(x, &params).is_nan(), "cdf at {x}");
    }
}

#[test]
fn short_parameter_vectors_give_nan() {
    for f in Family::ALL {
        let x = f.ppf(0.5, &defaults(f));
        assert!(f.prob(x, &[]).is_nan(), "{f}");
    }
}

// ───────────────────────── properties ─────────────────────────

proptest! {
    #[test]
    fn cdf_is_non_decreasing(i in 0usize..25, u in 0.0f64..1.0, v in 0.0f64..1.0) {
        let f = Family::ALL[i];
        let params = defaults(f);
        let (start, end) = default_range(f, &params).unwrap();
        let (u, v) = if u <= v { (u, v) } else { (v, u) };
        let x1 = start + u * (end - start);
        let x2 = start + v * (end - start);
        let (c1, c2) = (f.cdf(x1, &params), f.cdf(x2, &params));
        prop_assert!(c1 <= c2 + 1e-7, "{}: F({}) = {} > F({}) = {}", f, x1, c1, x2, c2);
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&c1), "{}: F({}) = {}", f, x1, c1);
    }

    #[test]
    fn gamma_ppf_round_trips(alpha in 0.2f64..30.0, beta in 0.05f64..20.0, p in 0.001f64..0.999) {
        let params = [alpha, beta];
        let x = Family::Gamma.ppf(p, &params);
        let back = Family::Gamma.cdf(x, &params);
        prop_assert!((back - p).abs() < 1e-6, "α={} β={} p={} got {}", alpha, beta, p, back);
    }

    #[test]
    fn student_t_ppf_round_trips(nu in 1.0f64..50.0, p in 0.01f64..0.99) {
        let params = [nu, 0.0, 1.0];
        let x = Family::StudentT.ppf(p, &params);
        let back = Family::StudentT.cdf(x, &params);
        prop_assert!((back - p).abs() < 1e-6, "ν={} p={} got {}", nu, p, back);
    }
}
