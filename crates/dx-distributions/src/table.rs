//! Static per-family metadata: slider defaults, labels and bounds.

use dx_core::Real;

use crate::params::{DistributionSpec, ParamSpec, Role};

const INF: Real = Real::INFINITY;

const fn probability(symbol: &'static str, value: Real) -> ParamSpec {
    ParamSpec::new(symbol, Role::Probability, 0.0, 1.0, value, 0.01)
}

const fn count(symbol: &'static str, end: Real, value: Real) -> ParamSpec {
    ParamSpec::new(symbol, Role::Count, 0.0, end, value, 1.0)
}

const fn positive(symbol: &'static str, role: Role, end: Real, value: Real) -> ParamSpec {
    ParamSpec::new(symbol, role, 0.01, end, value, 0.01)
}

const fn location(symbol: &'static str, start: Real, end: Real, value: Real) -> ParamSpec {
    ParamSpec::new(symbol, Role::Location, start, end, value, 0.01)
}

// ── Discrete ──────────────────────────────────────────────────────────────────

pub(crate) static BERNOULLI: DistributionSpec = DistributionSpec {
    name: "Bernoulli",
    var_name: "y",
    params: &[probability("θ", 0.5)],
    title: "Bernoulli(θ)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: 1.0,
};

pub(crate) static BETA_BINOMIAL: DistributionSpec = DistributionSpec {
    name: "BetaBinomial",
    var_name: "n",
    params: &[
        count("N", 20.0, 10.0),
        positive("α", Role::Shape, 10.0, 1.0),
        positive("β", Role::Shape, 10.0, 1.0),
    ],
    title: "BetaBinomial(N, α, β)",
    fixed_params: &[0],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static BINOMIAL: DistributionSpec = DistributionSpec {
    name: "Binomial",
    var_name: "n",
    params: &[count("N", 20.0, 10.0), probability("θ", 0.5)],
    title: "Binomial(N, θ)",
    fixed_params: &[0],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static CATEGORICAL: DistributionSpec = DistributionSpec {
    name: "Categorical",
    var_name: "y",
    params: &[
        probability("θ₁", 0.2),
        probability("θ₂", 0.3),
        probability("θ₃", 0.1),
    ],
    title: "Categorical(θ₁, θ₂, θ₃)",
    fixed_params: &[],
    hard_min: 1.0,
    hard_max: 4.0,
};

pub(crate) static DISCRETE_UNIFORM: DistributionSpec = DistributionSpec {
    name: "DiscreteUniform",
    var_name: "n",
    params: &[
        ParamSpec::new("low", Role::Location, -10.0, 10.0, 0.0, 1.0).integer(),
        ParamSpec::new("high", Role::Location, -10.0, 20.0, 10.0, 1.0).integer(),
    ],
    title: "DiscreteUniform(low, high)",
    fixed_params: &[],
    hard_min: -INF,
    hard_max: INF,
};

pub(crate) static GEOMETRIC: DistributionSpec = DistributionSpec {
    name: "Geometric",
    var_name: "y",
    params: &[ParamSpec::new("θ", Role::Probability, 0.01, 1.0, 0.5, 0.01)],
    title: "Geometric(θ)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static HYPERGEOMETRIC: DistributionSpec = DistributionSpec {
    name: "Hypergeometric",
    var_name: "n",
    params: &[
        ParamSpec::new("N", Role::Count, 1.0, 20.0, 10.0, 1.0),
        ParamSpec::new("a", Role::Count, 1.0, 20.0, 10.0, 1.0),
        ParamSpec::new("b", Role::Count, 1.0, 20.0, 10.0, 1.0),
    ],
    title: "Hypergeometric(N, a, b)",
    fixed_params: &[0],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static NEGATIVE_BINOMIAL: DistributionSpec = DistributionSpec {
    name: "NegativeBinomial",
    var_name: "y",
    params: &[
        positive("α", Role::Shape, 10.0, 1.0),
        positive("β", Role::Rate, 1.0, 0.2),
    ],
    title: "NegativeBinomial(α, β)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static NEGATIVE_BINOMIAL_MU_PHI: DistributionSpec = DistributionSpec {
    name: "NegativeBinomialMuPhi",
    var_name: "y",
    params: &[
        positive("μ", Role::Scale, 50.0, 5.0),
        positive("φ", Role::Shape, 10.0, 1.0),
    ],
    title: "NegativeBinomial(μ, φ)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static NEGATIVE_BINOMIAL_R_B: DistributionSpec = DistributionSpec {
    name: "NegativeBinomialRB",
    var_name: "y",
    params: &[
        positive("r", Role::Shape, 10.0, 1.0),
        positive("b", Role::Scale, 20.0, 5.0),
    ],
    title: "NegativeBinomial(r, b)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static POISSON: DistributionSpec = DistributionSpec {
    name: "Poisson",
    var_name: "n",
    params: &[positive("λ", Role::Rate, 20.0, 5.0)],
    title: "Poisson(λ)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

// ── Continuous ────────────────────────────────────────────────────────────────

pub(crate) static BETA: DistributionSpec = DistributionSpec {
    name: "Beta",
    var_name: "θ",
    params: &[
        positive("α", Role::Shape, 10.0, 2.0),
        positive("β", Role::Shape, 10.0, 5.0),
    ],
    title: "Beta(α, β)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: 1.0,
};

pub(crate) static CAUCHY: DistributionSpec = DistributionSpec {
    name: "Cauchy",
    var_name: "y",
    params: &[
        location("μ", -5.0, 5.0, 0.0),
        positive("σ", Role::Scale, 5.0, 1.0),
    ],
    title: "Cauchy(μ, σ)",
    fixed_params: &[],
    hard_min: -INF,
    hard_max: INF,
};

pub(crate) static EXPONENTIAL: DistributionSpec = DistributionSpec {
    name: "Exponential",
    var_name: "y",
    params: &[positive("β", Role::Rate, 10.0, 1.0)],
    title: "Exponential(β)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static GAMMA: DistributionSpec = DistributionSpec {
    name: "Gamma",
    var_name: "y",
    params: &[
        positive("α", Role::Shape, 10.0, 2.0),
        positive("β", Role::Rate, 10.0, 1.0),
    ],
    title: "Gamma(α, β)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static HALF_CAUCHY: DistributionSpec = DistributionSpec {
    name: "HalfCauchy",
    var_name: "y",
    params: &[
        location("μ", -5.0, 5.0, 0.0),
        positive("σ", Role::Scale, 5.0, 1.0),
    ],
    title: "HalfCauchy(μ, σ)",
    fixed_params: &[0],
    hard_min: -INF,
    hard_max: INF,
};

pub(crate) static HALF_NORMAL: DistributionSpec = DistributionSpec {
    name: "HalfNormal",
    var_name: "y",
    params: &[
        location("μ", -5.0, 5.0, 0.0),
        positive("σ", Role::Scale, 5.0, 1.0),
    ],
    title: "HalfNormal(μ, σ)",
    fixed_params: &[0],
    hard_min: -INF,
    hard_max: INF,
};

pub(crate) static HALF_STUDENT_T: DistributionSpec = DistributionSpec {
    name: "HalfStudentT",
    var_name: "y",
    params: &[
        ParamSpec::new("ν", Role::Shape, 1.0, 50.0, 3.0, 0.01),
        location("μ", -5.0, 5.0, 0.0),
        positive("σ", Role::Scale, 5.0, 1.0),
    ],
    title: "HalfStudentT(ν, μ, σ)",
    fixed_params: &[0, 1],
    hard_min: -INF,
    hard_max: INF,
};

pub(crate) static INVERSE_GAMMA: DistributionSpec = DistributionSpec {
    name: "InverseGamma",
    var_name: "y",
    params: &[
        positive("α", Role::Shape, 10.0, 3.0),
        positive("β", Role::Scale, 10.0, 2.0),
    ],
    title: "InverseGamma(α, β)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static LOG_NORMAL: DistributionSpec = DistributionSpec {
    name: "LogNormal",
    var_name: "y",
    params: &[
        location("μ", -2.0, 2.0, 0.0),
        positive("σ", Role::Scale, 2.0, 0.5),
    ],
    title: "LogNormal(μ, σ)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static NORMAL: DistributionSpec = DistributionSpec {
    name: "Normal",
    var_name: "y",
    params: &[
        location("μ", -5.0, 5.0, 0.0),
        positive("σ", Role::Scale, 5.0, 1.0),
    ],
    title: "Normal(μ, σ)",
    fixed_params: &[],
    hard_min: -INF,
    hard_max: INF,
};

pub(crate) static PARETO: DistributionSpec = DistributionSpec {
    name: "Pareto",
    var_name: "y",
    params: &[
        positive("yₘᵢₙ", Role::Scale, 10.0, 1.0),
        positive("α", Role::Shape, 10.0, 2.0),
    ],
    title: "Pareto(yₘᵢₙ, α)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};

pub(crate) static STUDENT_T: DistributionSpec = DistributionSpec {
    name: "StudentT",
    var_name: "y",
    params: &[
        ParamSpec::new("ν", Role::Shape, 1.0, 50.0, 3.0, 0.01),
        location("μ", -5.0, 5.0, 0.0),
        positive("σ", Role::Scale, 5.0, 1.0),
    ],
    title: "StudentT(ν, μ, σ)",
    fixed_params: &[0],
    hard_min: -INF,
    hard_max: INF,
};

pub(crate) static UNIFORM: DistributionSpec = DistributionSpec {
    name: "Uniform",
    var_name: "y",
    params: &[location("α", -5.0, 5.0, 0.0), location("β", -5.0, 10.0, 1.0)],
    title: "Uniform(α, β)",
    fixed_params: &[],
    hard_min: -INF,
    hard_max: INF,
};

pub(crate) static WEIBULL: DistributionSpec = DistributionSpec {
    name: "Weibull",
    var_name: "y",
    params: &[
        positive("α", Role::Shape, 5.0, 1.5),
        positive("σ", Role::Scale, 5.0, 1.0),
    ],
    title: "Weibull(α, σ)",
    fixed_params: &[],
    hard_min: 0.0,
    hard_max: INF,
};
