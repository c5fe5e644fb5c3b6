//! Numerical integration over a finite interval.
//!
//! Used to check that densities integrate to one and that integrating a
//! density between two points matches the difference of its CDF.

use dx_core::{ensure_arg, errors::Result, Real};

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

// ── Midpoint (fixed panels) ───────────────────────────────────────────────────

/// Midpoint rule on a fixed number of panels.
///
/// Never evaluates the endpoints, so it copes with integrable singularities
/// and jumps at the ends of a support.
#[derive(Debug, Clone)]
pub struct MidpointIntegral {
    intervals: usize,
}

impl MidpointIntegral {
    /// Create a midpoint integrator with `intervals` panels.
    pub fn new(intervals: usize) -> Self {
        Self { intervals }
    }
}

impl Integrator for MidpointIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        ensure_arg!(self.intervals > 0, "MidpointIntegral: intervals must be > 0");
        ensure_arg!(
            a.is_finite() && b.is_finite(),
            "MidpointIntegral: bounds must be finite, got [{a}, {b}]"
        );
        let h = (b - a) / self.intervals as Real;
        let sum: Real = (0..self.intervals)
            .map(|i| f(a + (i as Real + 0.5) * h))
            .sum();
        Ok(sum * h)
    }
}
