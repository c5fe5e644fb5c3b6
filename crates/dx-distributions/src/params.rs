//! Parameter metadata and parameter vectors.

use std::ops::Deref;

use dx_core::Real;

/// What a parameter does to its distribution.
///
/// The quantile setter uses the role to decide how to re-centre a slider
/// whose range no longer contains a solved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Shape parameter, positive.
    Shape,
    /// Rate (inverse scale), positive.
    Rate,
    /// Scale, positive.
    Scale,
    /// Location, unbounded.
    Location,
    /// A probability in `[0, 1]`.
    Probability,
    /// A non-negative integer count.
    Count,
}

impl Role {
    /// Whether the parameter may take negative values.
    pub fn is_signed(self) -> bool {
        matches!(self, Role::Location)
    }
}

/// Slider and domain metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Symbol shown next to the slider.
    pub symbol: &'static str,
    /// Semantic role.
    pub role: Role,
    /// Slider start.
    pub start: Real,
    /// Slider end.
    pub end: Real,
    /// Initial slider value.
    pub value: Real,
    /// Slider step.
    pub step: Real,
    /// Smallest legal value; may be `-∞`.
    pub min_value: Real,
    /// Largest legal value; may be `+∞`.
    pub max_value: Real,
    /// Whether only integer values are meaningful.
    pub integer: bool,
}

impl ParamSpec {
    /// A parameter whose legal range follows from its role.
    pub const fn new(
        symbol: &'static str,
        role: Role,
        start: Real,
        end: Real,
        value: Real,
        step: Real,
    ) -> Self {
        let (min_value, max_value) = match role {
            Role::Location => (Real::NEG_INFINITY, Real::INFINITY),
            Role::Probability => (0.0, 1.0),
            Role::Shape | Role::Rate | Role::Scale | Role::Count => (0.0, Real::INFINITY),
        };
        Self {
            symbol,
            role,
            start,
            end,
            value,
            step,
            min_value,
            max_value,
            integer: matches!(role, Role::Count),
        }
    }

    /// Mark the parameter as integer valued.
    pub const fn integer(self) -> Self {
        Self {
            integer: true,
            ..self
        }
    }

    /// Whether `v` lies within the legal range.
    pub fn admits(&self, v: Real) -> bool {
        v >= self.min_value && v <= self.max_value
    }
}

/// Static description of a distribution family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSpec {
    /// Display name, e.g. `"NegativeBinomialMuPhi"`.
    pub name: &'static str,
    /// Name of the random variable, used in quantile messages.
    pub var_name: &'static str,
    /// Parameters in evaluation order.
    pub params: &'static [ParamSpec],
    /// Plot title.
    pub title: &'static str,
    /// Indices of parameters the quantile setter holds fixed.
    pub fixed_params: &'static [usize],
    /// Hard lower bound on the random variable, regardless of parameters.
    pub hard_min: Real,
    /// Hard upper bound on the random variable, regardless of parameters.
    pub hard_max: Real,
}

impl DistributionSpec {
    /// Number of parameters.
    pub fn n_params(&self) -> usize {
        self.params.len()
    }

    /// Indices of the parameters the quantile setter solves for.
    pub fn active_params(&self) -> Vec<usize> {
        (0..self.params.len())
            .filter(|i| !self.fixed_params.contains(i))
            .collect()
    }

    /// Slider starting values.
    pub fn default_params(&self) -> ParameterVector {
        ParameterVector::new(self.params.iter().map(|p| p.value).collect())
    }
}

/// The ordered parameter values handed to an evaluator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterVector(Vec<Real>);

impl ParameterVector {
    /// Wrap a vector of values.
    pub fn new(values: Vec<Real>) -> Self {
        Self(values)
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[Real] {
        &self.0
    }

    /// Replace the value at `index`; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: Real) {
        if let Some(v) = self.0.get_mut(index) {
            *v = value;
        }
    }

    /// Consume into the inner vector.
    pub fn into_inner(self) -> Vec<Real> {
        self.0
    }
}

impl Deref for ParameterVector {
    type Target = [Real];

    fn deref(&self) -> &[Real] {
        &self.0
    }
}

impl From<Vec<Real>> for ParameterVector {
    fn from(values: Vec<Real>) -> Self {
        Self(values)
    }
}

/// First `N` entries of `params`, NaN-filled when the slice is short.
///
/// Evaluators unpack through this so a short vector yields NaN instead of
/// an out-of-bounds panic.
pub(crate) fn unpack<const N: usize>(params: &[Real]) -> [Real; N] {
    let mut out = [Real::NAN; N];
    for (o, v) in out.iter_mut().zip(params) {
        *o = *v;
    }
    out
}
