//! Error types for distribution-explorer.
//!
//! Numerical kernels and evaluators never return these: a point outside a
//! function's domain yields NaN so a curve still renders around it. Errors
//! are reserved for configuration problems, user-entered quantile targets,
//! and solvers that fail to converge.

use thiserror::Error;

/// The top-level error type used throughout distribution-explorer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A distribution name that does not match any supported family.
    #[error("distribution '{0}' is not supported")]
    UnknownDistribution(String),

    /// A required configuration entry is absent.
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A quantile target entered by the user was rejected.
    ///
    /// The payload is the message shown to the user.
    #[error("{0}")]
    InvalidQuantile(String),

    /// The operation is not available for this distribution family.
    #[error("not supported: {0}")]
    Unsupported(String),

    /// An iterative solver stopped before meeting its tolerance.
    #[error("no convergence after {iterations} iterations (residual {residual:e})")]
    NonConvergence {
        /// Iterations performed before giving up.
        iterations: usize,
        /// Largest absolute residual at the final iterate.
        residual: f64,
    },
}

/// Shorthand `Result` type used throughout distribution-explorer.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dx_core::{ensure, errors::Error};
/// fn positive(x: f64) -> dx_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dx_core::{ensure_arg, errors::Error};
/// fn points(n: usize) -> dx_core::errors::Result<usize> {
///     ensure_arg!(n >= 2, "need at least two grid points, got {n}");
///     Ok(n)
/// }
/// assert!(points(400).is_ok());
/// assert!(matches!(points(1), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure_arg {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use dx_core::{fail, errors::Error};
/// fn always_err() -> dx_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
