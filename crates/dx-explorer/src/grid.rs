//! Evaluation grids.
//!
//! Continuous families are sampled on an evenly spaced grid across the
//! visible range. Discrete families are sampled on the integer lattice
//! inside it, clipped below at the family's hard minimum; Bernoulli and
//! Categorical always use their whole (tiny) support.
//!
//! A lattice never holds more than its configured maximum. Past that the
//! integers nearest the left edge of the range are kept.

use dx_core::Real;
use dx_distributions::{Family, Kind};
use dx_math::linspace;
use tracing::warn;

/// Largest magnitude at which consecutive integers stay distinct in `f64`.
const MAX_EXACT_INTEGER: Real = 9_007_199_254_740_992.0;

/// Points at which both curves are evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationGrid {
    range: (Real, Real),
    n_points: usize,
    x: Vec<Real>,
}

impl EvaluationGrid {
    /// Build the grid for `family` over `range`.
    ///
    /// `n_points` only applies to continuous families and
    /// `max_lattice_points` only to discrete ones.
    pub fn build(
        family: Family,
        range: (Real, Real),
        n_points: usize,
        max_lattice_points: usize,
    ) -> Self {
        let x = match family {
            Family::Bernoulli => vec![0.0, 1.0],
            Family::Categorical => vec![1.0, 2.0, 3.0, 4.0],
            _ => match family.kind() {
                Kind::Discrete => lattice(family.spec().hard_min, range, max_lattice_points),
                Kind::Continuous => linspace(range.0, range.1, n_points),
            },
        };
        Self { range, n_points, x }
    }

    /// Whether this grid was built for `range` with `n_points`.
    pub fn matches(&self, range: (Real, Real), n_points: usize) -> bool {
        self.range == range && self.n_points == n_points
    }

    /// Grid points, ascending.
    pub fn x(&self) -> &[Real] {
        &self.x
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Consecutive integers from `max(hard_min, floor(start))` to `floor(end)`,
/// at most `max_points` of them.
fn lattice(hard_min: Real, (start, end): (Real, Real), max_points: usize) -> Vec<Real> {
    let first = hard_min.max(start.floor()).max(-MAX_EXACT_INTEGER);
    let last = end.floor().min(MAX_EXACT_INTEGER);
    if !first.is_finite() || !last.is_finite() || last < first || max_points == 0 {
        return Vec::new();
    }
    // Both ends are exact integers, so the span is too.
    let span = last - first;
    let n = if span < max_points as Real {
        span as usize + 1
    } else {
        warn!(start, end, max_points, "lattice truncated at its right edge");
        max_points
    };
    (0..n).map(|i| first + i as Real).collect()
}
