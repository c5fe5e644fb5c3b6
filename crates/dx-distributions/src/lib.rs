//! # dx-distributions
//!
//! Evaluators for 11 discrete and 14 continuous distribution families, the
//! static parameter table that drives the explorer's sliders, default plot
//! ranges, and the quantile setter.
//!
//! Every evaluator has the signature `fn(Real, &[Real]) -> Real` and returns
//! NaN rather than failing on out-of-domain input, so a curve evaluated over
//! a grid always comes back whole.
//!
//! ```
//! use dx_distributions::Family;
//!
//! let f: Family = "Normal".parse().unwrap();
//! assert!((f.cdf(0.0, &[0.0, 1.0]) - 0.5).abs() < 1e-12);
//! assert!(Family::Binomial.prob(5.0, &[3.0, 0.5]).is_nan());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Continuous families.
pub mod continuous;

/// Default x ranges.
pub mod default_range;

/// Discrete families.
pub mod discrete;

/// The family enum and central dispatch.
pub mod family;

/// Parameter metadata and vectors.
pub mod params;

/// Parameters from target quantiles.
pub mod quantile;

/// Summed CDFs, quantiles and staircases for discrete families.
pub mod summation;

mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use default_range::default_range;
pub use family::{Evaluators, Family, Kind};
pub use params::{DistributionSpec, ParamSpec, ParameterVector, Role};
pub use quantile::{quantile_count, set_quantiles, QuantileTarget};
pub use summation::{
    staircase, Accumulated, Evaluator, StaircasePadding, SummationSettings,
};
