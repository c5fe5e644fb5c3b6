//! The closed set of supported distribution families.
//!
//! [`Family`] ties each family to its static [`DistributionSpec`] and to the
//! evaluator functions in [`crate::discrete`] and [`crate::continuous`].

use std::fmt;
use std::str::FromStr;

use dx_core::{errors::Error, Real};

use crate::continuous::{
    beta, cauchy, exponential, gamma, half_cauchy, half_normal, half_student_t, inverse_gamma,
    log_normal, normal, pareto, student_t, uniform, weibull,
};
use crate::discrete::{
    bernoulli, beta_binomial, binomial, categorical, discrete_uniform, geometric, hypergeometric,
    negative_binomial, negative_binomial_mu_phi, negative_binomial_r_b, poisson,
};
use crate::params::DistributionSpec;
use crate::summation::{accumulate, Accumulated, Evaluator, SummationSettings};
use crate::table;

/// Whether a family has a mass function or a density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Integer-valued; evaluated on a lattice.
    Discrete,
    /// Real-valued; evaluated on an evenly spaced grid.
    Continuous,
}

/// A supported distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Family {
    // Discrete
    Bernoulli,
    BetaBinomial,
    Binomial,
    Categorical,
    DiscreteUniform,
    Geometric,
    Hypergeometric,
    NegativeBinomial,
    NegativeBinomialMuPhi,
    NegativeBinomialRB,
    Poisson,
    // Continuous
    Beta,
    Cauchy,
    Exponential,
    Gamma,
    HalfCauchy,
    HalfNormal,
    HalfStudentT,
    InverseGamma,
    LogNormal,
    Normal,
    Pareto,
    StudentT,
    Uniform,
    Weibull,
}

/// Function pointers for one family.
#[derive(Clone, Copy)]
pub struct Evaluators {
    /// PMF for discrete families, PDF for continuous ones.
    pub prob: Evaluator,
    /// Cumulative distribution function.
    pub cdf: Evaluator,
    /// Inverse CDF; takes a probability in place of `x`.
    pub ppf: Evaluator,
    /// Support bounds for a parameter vector.
    pub support: fn(&[Real]) -> (Real, Real),
}

impl fmt::Debug for Evaluators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluators").finish_non_exhaustive()
    }
}

macro_rules! evaluators {
    ($module:ident, $prob:ident) => {
        Evaluators {
            prob: $module::$prob,
            cdf: $module::cdf,
            ppf: $module::ppf,
            support: $module::support,
        }
    };
}

impl Family {
    /// Every family, discrete ones first.
    pub const ALL: [Family; 25] = [
        Family::Bernoulli,
        Family::BetaBinomial,
        Family::Binomial,
        Family::Categorical,
        Family::DiscreteUniform,
        Family::Geometric,
        Family::Hypergeometric,
        Family::NegativeBinomial,
        Family::NegativeBinomialMuPhi,
        Family::NegativeBinomialRB,
        Family::Poisson,
        Family::Beta,
        Family::Cauchy,
        Family::Exponential,
        Family::Gamma,
        Family::HalfCauchy,
        Family::HalfNormal,
        Family::HalfStudentT,
        Family::InverseGamma,
        Family::LogNormal,
        Family::Normal,
        Family::Pareto,
        Family::StudentT,
        Family::Uniform,
        Family::Weibull,
    ];

    /// Static metadata for this family.
    pub fn spec(self) -> &'static DistributionSpec {
        match self {
            Family::Bernoulli => &table::BERNOULLI,
            Family::BetaBinomial => &table::BETA_BINOMIAL,
            Family::Binomial => &table::BINOMIAL,
            Family::Categorical => &table::CATEGORICAL,
            Family::DiscreteUniform => &table::DISCRETE_UNIFORM,
            Family::Geometric => &table::GEOMETRIC,
            Family::Hypergeometric => &table::HYPERGEOMETRIC,
            Family::NegativeBinomial => &table::NEGATIVE_BINOMIAL,
            Family::NegativeBinomialMuPhi => &table::NEGATIVE_BINOMIAL_MU_PHI,
            Family::NegativeBinomialRB => &table::NEGATIVE_BINOMIAL_R_B,
            Family::Poisson => &table::POISSON,
            Family::Beta => &table::BETA,
            Family::Cauchy => &table::CAUCHY,
            Family::Exponential => &table::EXPONENTIAL,
            Family::Gamma => &table::GAMMA,
            Family::HalfCauchy => &table::HALF_CAUCHY,
            Family::HalfNormal => &table::HALF_NORMAL,
            Family::HalfStudentT => &table::HALF_STUDENT_T,
            Family::InverseGamma => &table::INVERSE_GAMMA,
            Family::LogNormal => &table::LOG_NORMAL,
            Family::Normal => &table::NORMAL,
            Family::Pareto => &table::PARETO,
            Family::StudentT => &table::STUDENT_T,
            Family::Uniform => &table::UNIFORM,
            Family::Weibull => &table::WEIBULL,
        }
    }

    /// Display name, identical to the variant name.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Discrete or continuous.
    pub fn kind(self) -> Kind {
        match self {
            Family::Bernoulli
            | Family::BetaBinomial
            | Family::Binomial
            | Family::Categorical
            | Family::DiscreteUniform
            | Family::Geometric
            | Family::Hypergeometric
            | Family::NegativeBinomial
            | Family::NegativeBinomialMuPhi
            | Family::NegativeBinomialRB
            | Family::Poisson => Kind::Discrete,
            _ => Kind::Continuous,
        }
    }

    /// Shorthand for `kind() == Kind::Discrete`.
    pub fn is_discrete(self) -> bool {
        self.kind() == Kind::Discrete
    }

    /// The evaluator function pointers.
    pub fn evaluators(self) -> Evaluators {
        match self {
            Family::Bernoulli => evaluators!(bernoulli, pmf),
            Family::BetaBinomial => evaluators!(beta_binomial, pmf),
            Family::Binomial => evaluators!(binomial, pmf),
            Family::Categorical => evaluators!(categorical, pmf),
            Family::DiscreteUniform => evaluators!(discrete_uniform, pmf),
            Family::Geometric => evaluators!(geometric, pmf),
            Family::Hypergeometric => evaluators!(hypergeometric, pmf),
            Family::NegativeBinomial => evaluators!(negative_binomial, pmf),
            Family::NegativeBinomialMuPhi => evaluators!(negative_binomial_mu_phi, pmf),
            Family::NegativeBinomialRB => evaluators!(negative_binomial_r_b, pmf),
            Family::Poisson => evaluators!(poisson, pmf),
            Family::Beta => evaluators!(beta, pdf),
            Family::Cauchy => evaluators!(cauchy, pdf),
            Family::Exponential => evaluators!(exponential, pdf),
            Family::Gamma => evaluators!(gamma, pdf),
            Family::HalfCauchy => evaluators!(half_cauchy, pdf),
            Family::HalfNormal => evaluators!(half_normal, pdf),
            Family::HalfStudentT => evaluators!(half_student_t, pdf),
            Family::InverseGamma => evaluators!(inverse_gamma, pdf),
            Family::LogNormal => evaluators!(log_normal, pdf),
            Family::Normal => evaluators!(normal, pdf),
            Family::Pareto => evaluators!(pareto, pdf),
            Family::StudentT => evaluators!(student_t, pdf),
            Family::Uniform => evaluators!(uniform, pdf),
            Family::Weibull => evaluators!(weibull, pdf),
        }
    }

    /// PMF or PDF at `x`.
    #[inline]
    pub fn prob(self, x: Real, params: &[Real]) -> Real {
        (self.evaluators().prob)(x, params)
    }

    /// CDF at `x`.
    #[inline]
    pub fn cdf(self, x: Real, params: &[Real]) -> Real {
        (self.evaluators().cdf)(x, params)
    }

    /// Inverse CDF at probability `p`.
    #[inline]
    pub fn ppf(self, p: Real, params: &[Real]) -> Real {
        (self.evaluators().ppf)(p, params)
    }

    /// Support bounds for `params`; NaN when the parameters are invalid.
    #[inline]
    pub fn support(self, params: &[Real]) -> (Real, Real) {
        (self.evaluators().support)(params)
    }

    /// Cumulative values over an ascending lattice of consecutive integers.
    ///
    /// Bernoulli and Categorical have closed-form CDFs and are evaluated
    /// point by point. Other discrete families run one pass of
    /// [`accumulate`] from the bottom of their support. Continuous families
    /// evaluate their CDF point by point.
    pub fn cdf_on_lattice(
        self,
        lattice: &[Real],
        params: &[Real],
        settings: &SummationSettings,
    ) -> Accumulated {
        let ev = self.evaluators();
        match self {
            Family::Bernoulli | Family::Categorical => Accumulated {
                before: lattice
                    .first()
                    .map_or(Real::NAN, |&first| (ev.cdf)(first - 1.0, params)),
                values: lattice.iter().map(|&x| (ev.cdf)(x, params)).collect(),
            },
            _ if self.is_discrete() => {
                let (lower, _) = (ev.support)(params);
                accumulate(ev.prob, lower, lattice, params, settings)
            }
            _ => Accumulated {
                before: lattice
                    .first()
                    .map_or(Real::NAN, |&first| (ev.cdf)(first, params)),
                values: lattice.iter().map(|&x| (ev.cdf)(x, params)).collect(),
            },
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Error;

    /// Case-insensitive; underscores, dashes and spaces are ignored, so
    /// `"half_student_t"` and `"HalfStudentT"` name the same family.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Family::ALL
            .iter()
            .copied()
            .find(|f| f.name().to_lowercase() == key)
            .ok_or_else(|| Error::UnknownDistribution(s.to_string()))
    }
}
