//! # dx-explorer
//!
//! The update side of a distribution explorer. An [`Explorer`] owns the
//! sliders and the visible ranges for one family, turns UI [`Event`]s into
//! state changes, and writes freshly evaluated curves into two
//! [`CurveSource`]s whose observers the rendering host registers.
//!
//! ```
//! use dx_explorer::{Event, Explorer, ExplorerConfig};
//!
//! let mut explorer = Explorer::new(&ExplorerConfig::new("Poisson")).unwrap();
//! explorer
//!     .handle(Event::SliderMoved { index: 0, value: 2.0 })
//!     .unwrap();
//! let pmf = explorer.probability().data();
//! assert_eq!(pmf.x[0], 0.0);
//! assert!((pmf.y[0] - (-2.0f64).exp()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Configuration loaded from JSON.
pub mod config;

/// Curve data and observable curve sources.
pub mod curve;

/// The event-driven explorer.
pub mod explorer;

/// Significant-figure formatting.
pub mod format;

/// Evaluation grids.
pub mod grid;

/// Quantile boxes.
pub mod quantile_boxes;

/// Parameter sliders.
pub mod sliders;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::{ExplorerConfig, PaddingConfig, SliderOverride};
pub use curve::{CurveData, CurveSource};
pub use explorer::{Batch, Event, Explorer, ExplorerState, YRanges};
pub use grid::EvaluationGrid;
pub use quantile_boxes::QuantileBoxes;
pub use sliders::{Bound, BoundEdit, Slider};
