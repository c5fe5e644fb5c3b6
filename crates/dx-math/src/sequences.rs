//! Evenly spaced sequences.

use dx_core::Real;

/// `n` evenly spaced points from `start` to `stop`, both included.
///
/// The last point is set to `stop` exactly rather than accumulated, so a
/// grid over `[0, 10]` ends on `10.0` bit for bit. `n == 1` yields `[start]`.
pub fn linspace(start: Real, stop: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as Real;
            let mut x: Vec<Real> = (0..n).map(|i| start + i as Real * step).collect();
            x[n - 1] = stop;
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_and_spacing() {
        let x = linspace(0.0, 10.0, 400);
        assert_eq!(x.len(), 400);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[399], 10.0);
        let step = 10.0 / 399.0;
        for w in x.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_degenerate_lengths() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }
}
