//! Cross-checks against `statrs`.
//!
//! The kernels trade a little accuracy for speed (the error function is good
//! to about 1e-7 and the incomplete beta continued fraction stops at 3e-7),
//! so comparisons use tolerances of 1e-6.

use approx::assert_abs_diff_eq;
use dx_distributions::Family;
use statrs::distribution::{
    Beta, Binomial, Continuous, ContinuousCDF, Discrete, DiscreteCDF, Gamma, NegativeBinomial,
    Normal, Poisson, StudentsT,
};

// ───────────────────────── negative binomial ─────────────────────────

#[test]
fn negative_binomial_matches_statrs() {
    for (alpha, beta) in [(1.0, 0.2), (3.5, 1.0), (0.7, 4.0)] {
        let reference = NegativeBinomial::new(alpha, beta / (1.0 + beta)).unwrap();
        for k in 0u64..30 {
            let y = k as f64;
            assert_abs_diff_eq!(
                Family::NegativeBinomial.prob(y, &[alpha, beta]),
                reference.pmf(k),
                epsilon = 1e-10
            );
            assert_abs_diff_eq!(
                Family::NegativeBinomial.cdf(y, &[alpha, beta]),
                reference.cdf(k),
                epsilon = 1e-6
            );
        }
    }
}

#[test]
fn negative_binomial_parametrizations_agree() {
    // (μ, φ) is (α, β) with α = φ, β = φ/μ; (r, b) is α = r, β = 1/b.
    for (mu, phi) in [(5.0, 1.0), (12.0, 0.4), (0.8, 7.0)] {
        let (alpha, beta) = (phi, phi / mu);
        for y in 0..40 {
            let y = f64::from(y);
            let a = Family::NegativeBinomialMuPhi.prob(y, &[mu, phi]);
            let b = Family::NegativeBinomial.prob(y, &[alpha, beta]);
            assert!((a - b).abs() < 1e-12, "μφ at {y}: {a} vs {b}");
        }
    }
    for (r, b) in [(1.0, 5.0), (2.5, 0.3)] {
        for y in 0..40 {
            let y = f64::from(y);
            let x = Family::NegativeBinomialRB.prob(y, &[r, b]);
            let z = Family::NegativeBinomial.prob(y, &[r, 1.0 / b]);
            assert!((x - z).abs() < 1e-12, "rb at {y}: {x} vs {z}");
        }
    }
}

#[test]
fn negative_binomial_mean_is_mu() {
    let (mu, phi) = (6.0, 2.0);
    let mean: f64 = (0..2_000)
        .map(|y| {
            let y = f64::from(y);
            y * Family::NegativeBinomialMuPhi.prob(y, &[mu, phi])
        })
        .sum();
    assert!((mean - mu).abs() < 1e-8, "got {mean}");
}

// ───────────────────────── other discrete ─────────────────────────

#[test]
fn poisson_and_binomial_match_statrs() {
    let poisson = Poisson::new(3.7).unwrap();
    let binomial = Binomial::new(0.35, 17).unwrap();
    for k in 0u64..=17 {
        let n = k as f64;
        assert_abs_diff_eq!(Family::Poisson.prob(n, &[3.7]), poisson.pmf(k), epsilon = 1e-12);
        assert_abs_diff_eq!(Family::Poisson.cdf(n, &[3.7]), poisson.cdf(k), epsilon = 1e-10);
        assert_abs_diff_eq!(
            Family::Binomial.prob(n, &[17.0, 0.35]),
            binomial.pmf(k),
            epsilon = 1e-12
        );
    }
}

// ───────────────────────── Student-t ─────────────────────────

#[test]
fn student_t_matches_statrs() {
    for nu in [1.0, 2.0, 3.5, 10.0, 40.0] {
        let reference = StudentsT::new(1.5, 2.0, nu).unwrap();
        for x in [-20.0, -4.0, -1.0, 0.0, 1.5, 2.0, 3.0, 9.0, 50.0] {
            let params = [nu, 1.5, 2.0];
            assert_abs_diff_eq!(
                Family::StudentT.prob(x, &params),
                reference.pdf(x),
                epsilon = 1e-10
            );
            assert_abs_diff_eq!(
                Family::StudentT.cdf(x, &params),
                reference.cdf(x),
                epsilon = 1e-6
            );
        }
    }
}

#[test]
fn student_t_cdf_branches_meet_at_location() {
    // Left and right of μ use different incomplete-beta arguments.
    for nu in [0.5, 1.0, 3.0, 30.0] {
        let params = [nu, -2.0, 0.5];
        let left = Family::StudentT.cdf(-2.0 - 1e-9, &params);
        let right = Family::StudentT.cdf(-2.0 + 1e-9, &params);
        assert!((left - 0.5).abs() < 1e-6, "ν = {nu}: {left}");
        assert!((right - 0.5).abs() < 1e-6, "ν = {nu}: {right}");
        assert!(left <= right);
    }
}

#[test]
fn half_student_t_folds_student_t() {
    for nu in [1.0, 4.0, 25.0] {
        let reference = StudentsT::new(0.0, 1.3, nu).unwrap();
        let params = [nu, 0.0, 1.3];
        for x in [0.1, 0.8, 2.0, 6.0] {
            assert_abs_diff_eq!(
                Family::HalfStudentT.prob(x, &params),
                2.0 * reference.pdf(x),
                epsilon = 1e-10
            );
            assert_abs_diff_eq!(
                Family::HalfStudentT.cdf(x, &params),
                2.0 * reference.cdf(x) - 1.0,
                epsilon = 1e-6
            );
        }
        // No mass below the location.
        assert_eq!(Family::HalfStudentT.prob(-0.5, &params), 0.0);
        assert_eq!(Family::HalfStudentT.cdf(-0.5, &params), 0.0);
    }
}

// ───────────────────────── continuous ─────────────────────────

#[test]
fn gamma_beta_normal_match_statrs() {
    let gamma = Gamma::new(2.5, 1.7).unwrap();
    let beta = Beta::new(2.0, 5.0).unwrap();
    let normal = Normal::new(-1.0, 2.0).unwrap();
    for x in [0.05, 0.3, 0.6, 0.95] {
        assert_abs_diff_eq!(Family::Beta.prob(x, &[2.0, 5.0]), beta.pdf(x), epsilon = 1e-10);
        assert_abs_diff_eq!(Family::Beta.cdf(x, &[2.0, 5.0]), beta.cdf(x), epsilon = 1e-6);
    }
    for x in [0.1, 1.0, 2.5, 7.0] {
        assert_abs_diff_eq!(Family::Gamma.prob(x, &[2.5, 1.7]), gamma.pdf(x), epsilon = 1e-10);
        assert_abs_diff_eq!(Family::Gamma.cdf(x, &[2.5, 1.7]), gamma.cdf(x), epsilon = 1e-9);
    }
    for x in [-6.0, -1.0, 0.5, 3.0] {
        assert_abs_diff_eq!(Family::Normal.prob(x, &[-1.0, 2.0]), normal.pdf(x), epsilon = 1e-12);
        assert_abs_diff_eq!(Family::Normal.cdf(x, &[-1.0, 2.0]), normal.cdf(x), epsilon = 1e-6);
        let p = normal.cdf(x);
        assert_abs_diff_eq!(Family::Normal.ppf(p, &[-1.0, 2.0]), x, epsilon = 1e-5);
    }
}
