//! # distribution-explorer
//!
//! Numerical core of an interactive explorer for univariate probability
//! distributions: 25 families with their mass or density, cumulative and
//! quantile functions, a quantile setter that finds parameters from target
//! quantiles, and the event-driven state that keeps two curves in step with
//! a set of parameter sliders.
//!
//! This crate is a **façade** over the workspace crates. Application code
//! should depend on it rather than on the individual `dx-*` crates.
//!
//! ```rust
//! use distribution_explorer::explorer::{Event, Explorer};
//! use distribution_explorer::distributions::Family;
//!
//! let mut explorer = Explorer::for_family(Family::Normal).unwrap();
//! explorer
//!     .handle(Event::QuantileEdited {
//!         x: vec!["-1".into(), "1".into()],
//!         p: vec!["0.025".into(), "0.975".into()],
//!     })
//!     .unwrap();
//! let sigma = explorer.params()[1];
//! assert!((sigma - 0.5102).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Scalar aliases, errors and the observer pattern.
pub use dx_core as core;

/// Special functions, solvers and integration rules.
pub use dx_math as math;

/// Distribution families, default ranges and the quantile setter.
pub use dx_distributions as distributions;

/// Sliders, grids, curve sources and the explorer state machine.
pub use dx_explorer as explorer;

pub use dx_core::{Error, Result};
pub use dx_distributions::Family;
pub use dx_explorer::{Event, Explorer, ExplorerConfig};
