//! # dx-core
//!
//! Core types and error definitions for distribution-explorer.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the `Real` scalar alias, the error enum with its `ensure!` /
//! `ensure_arg!` / `fail!` macros, the Observer/Observable pattern used
//! to tell a rendering host that curve data changed, and a stopwatch that
//! degrades gracefully where no clock exists.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_arg!` / `fail!` macros.
pub mod errors;

/// Design patterns: observable.
pub mod patterns;

/// Wall-clock timing.
pub mod stopwatch;

// ── Primitive type alias ──────────────────────────────────────────────────────

/// Floating-point type used throughout the workspace.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use patterns::observable::{Observable, ObserverList, Observer};
pub use stopwatch::Stopwatch;
