//! Discrete CDFs and quantiles by summing the mass function.
//!
//! Most discrete families have no convenient closed-form CDF. Their CDF is
//! the running sum of the PMF over integer support points, starting at the
//! smallest point of the support. NaN summands are skipped, so points
//! outside the support contribute nothing.

use dx_core::Real;
use dx_math::comparison::is_close;

/// Signature shared by every evaluator.
pub type Evaluator = fn(Real, &[Real]) -> Real;

/// Limits on summation loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummationSettings {
    /// Most PMF terms a single CDF or quantile evaluation may add up.
    pub max_terms: usize,
}

impl Default for SummationSettings {
    fn default() -> Self {
        Self { max_terms: 100_000 }
    }
}

/// `P(X ≤ x)` by summing `pmf` from `lower` up to `min(x, upper)`.
///
/// Returns 0 below the support and NaN for NaN `x` or an undefined support.
/// An infinite `x` gives 1 when the mass function is defined at `lower`.
/// After `max_terms` terms the partial sum is returned.
pub fn summed_cdf(
    pmf: Evaluator,
    (lower, upper): (Real, Real),
    x: Real,
    params: &[Real],
    settings: &SummationSettings,
) -> Real {
    if x.is_nan() || lower.is_nan() || upper.is_nan() {
        return Real::NAN;
    }
    if x < lower {
        return 0.0;
    }
    if x == Real::INFINITY {
        return if pmf(lower, params).is_nan() {
            Real::NAN
        } else {
            1.0
        };
    }

    let top = x.floor().min(upper);
    let mut sum = 0.0;
    let mut n = lower;
    let mut terms = 0;
    while n <= top && terms < settings.max_terms {
        let term = pmf(n, params);
        if !term.is_nan() {
            sum += term;
        }
        n += 1.0;
        terms += 1;
    }
    sum
}

/// CDF values over a contiguous integer lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulated {
    /// `P(X < lattice[0])`, the level left of the first point.
    pub before: Real,
    /// `P(X ≤ lattice[i])` for each lattice point.
    pub values: Vec<Real>,
}

/// Accumulate `pmf` over an ascending lattice of consecutive integers.
///
/// Sums once from `lower` up to the first lattice point, then runs a
/// cumulative sum across the lattice, so each point costs one PMF call.
pub fn accumulate(
    pmf: Evaluator,
    lower: Real,
    lattice: &[Real],
    params: &[Real],
    settings: &SummationSettings,
) -> Accumulated {
    let Some(&first) = lattice.first() else {
        return Accumulated {
            before: Real::NAN,
            values: Vec::new(),
        };
    };
    if lower.is_nan() {
        return Accumulated {
            before: Real::NAN,
            values: vec![Real::NAN; lattice.len()],
        };
    }

    let mut sum = 0.0;
    let mut n = lower;
    let mut terms = 0;
    while n < first && terms < settings.max_terms {
        let term = pmf(n, params);
        if !term.is_nan() {
            sum += term;
        }
        n += 1.0;
        terms += 1;
    }
    let before = sum;

    let values = lattice
        .iter()
        .map(|&x| {
            let term = pmf(x, params);
            if !term.is_nan() {
                sum += term;
            }
            sum
        })
        .collect();

    Accumulated { before, values }
}

/// Smallest support point `n` with `P(X ≤ n) ≥ p`.
///
/// The comparison is tolerant, so a running sum that falls short of `p`
/// by rounding alone still stops. Returns `lower` at `p = 0` and `upper`
/// at `p = 1`, and NaN when the mass at `lower` is undefined or the term
/// cap is reached first.
pub fn summed_ppf(
    pmf: Evaluator,
    (lower, upper): (Real, Real),
    p: Real,
    params: &[Real],
    settings: &SummationSettings,
) -> Real {
    if !(0.0..=1.0).contains(&p) || lower.is_nan() || upper.is_nan() {
        return Real::NAN;
    }
    if p == 0.0 {
        return lower;
    }
    if p == 1.0 {
        return upper;
    }

    let mut n = lower;
    let mut sum = pmf(n, params);
    if sum.is_nan() {
        return Real::NAN;
    }
    let mut terms = 1;
    while sum < p && !is_close(sum, p) && n < upper {
        if terms >= settings.max_terms {
            return Real::NAN;
        }
        n += 1.0;
        let term = pmf(n, params);
        if term.is_nan() {
            break;
        }
        sum += term;
        terms += 1;
    }
    n
}

// ── Staircase ─────────────────────────────────────────────────────────────────

/// How far the cumulative staircase extends past the outer lattice points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaircasePadding {
    /// Fraction of the lattice width.
    pub fraction: Real,
    /// Upper limit on the padding.
    pub max: Real,
}

impl Default for StaircasePadding {
    fn default() -> Self {
        Self {
            fraction: 0.05,
            max: 0.95,
        }
    }
}

impl StaircasePadding {
    /// Padding for a lattice spanning `width`.
    pub fn offset(&self, width: Real) -> Real {
        (self.fraction * width).min(self.max)
    }
}

/// Turn point CDF values into the x/y arrays of a step plot.
///
/// Each lattice point appears twice: first at the previous level, then at
/// its own. A padded point at each end carries the outer levels flat. The
/// result has `2 n + 2` points for `n` lattice points, or none when the
/// lattice is empty.
pub fn staircase(
    lattice: &[Real],
    acc: &Accumulated,
    padding: &StaircasePadding,
) -> (Vec<Real>, Vec<Real>) {
    let (Some(&first), Some(&last)) = (lattice.first(), lattice.last()) else {
        return (Vec::new(), Vec::new());
    };
    let pad = padding.offset(last - first);
    let mut xs = Vec::with_capacity(2 * lattice.len() + 2);
    let mut ys = Vec::with_capacity(2 * lattice.len() + 2);

    xs.push(first - pad);
    ys.push(acc.before);
    let mut level = acc.before;
    for (&x, &c) in lattice.iter().zip(&acc.values) {
        xs.push(x);
        ys.push(level);
        xs.push(x);
        ys.push(c);
        level = c;
    }
    xs.push(last + pad);
    ys.push(level);
    (xs, ys)
}
