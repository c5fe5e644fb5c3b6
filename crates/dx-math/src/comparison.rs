//! Tolerant floating-point comparisons.

use dx_core::Real;

/// Default relative tolerance of [`is_close`].
pub const DEFAULT_RTOL: Real = 1e-7;

/// Default absolute tolerance of [`is_close`], [`is_one`] and [`is_zero`].
pub const DEFAULT_ATOL: Real = 1e-8;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// `|x - y| <= atol + rtol * |y|` with the default tolerances.
///
/// Used where a running sum is compared against a target probability, so
/// that accumulated rounding does not push a discrete quantile one step too
/// far.
#[inline]
pub fn is_close(x: Real, y: Real) -> bool {
    is_close_with(x, y, DEFAULT_RTOL, DEFAULT_ATOL)
}

/// [`is_close`] with explicit tolerances.
#[inline]
pub fn is_close_with(x: Real, y: Real, rtol: Real, atol: Real) -> bool {
    (x - y).abs() <= atol + rtol * y.abs()
}

/// Whether `x` is one to within `1e-8 + 1e-5`.
#[inline]
pub fn is_one(x: Real) -> bool {
    (x - 1.0).abs() <= DEFAULT_ATOL + 1e-5
}

/// Whether `|x| <= 1e-8`.
#[inline]
pub fn is_zero(x: Real) -> bool {
    x.abs() <= DEFAULT_ATOL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_basic() {
        assert!(close(1.0, 1.0 + 1e-11, 1e-10));
        assert!(!close(1.0, 1.0 + 1e-9, 1e-10));
    }

    #[test]
    fn is_close_is_relative_to_second_argument() {
        assert!(is_close(0.999_999_95, 1.0));
        assert!(!is_close(0.999_99, 1.0));
        assert!(is_close(1e6 + 0.05, 1e6));
        assert!(!is_close(1.0, 1e-9));
    }

    #[test]
    fn one_and_zero() {
        assert!(is_one(1.0 + 5e-6));
        assert!(!is_one(1.0 + 5e-5));
        assert!(is_zero(-5e-9));
        assert!(!is_zero(1e-7));
    }
}
