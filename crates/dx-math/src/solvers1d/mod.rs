//! One-dimensional root finders used to invert CDFs.

use dx_core::{ensure, errors::Result, fail, Real};

const MAX_ITERATIONS: usize = 1000;
const SECANT_MAX_ITERATIONS: usize = 200;
const DEFAULT_ACCURACY: Real = 1.0e-8;

fn accuracy_or_default(accuracy: Real) -> Real {
    if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    }
}

// ── Brent ─────────────────────────────────────────────────────────────────────

/// Brent's method for a root of `f` in `[x_min, x_max]`.
///
/// Mixes bisection with secant and inverse quadratic interpolation. An
/// endpoint whose value is already within `accuracy` of zero is returned as
/// is; otherwise the endpoints must bracket a sign change.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = accuracy_or_default(accuracy);
    let (mut a, mut b) = (x_min, x_max);
    let (mut fa, mut fb) = (f(a), f(b));

    if fa.abs() < acc {
        return Ok(a);
    }
    if fb.abs() < acc {
        return Ok(b);
    }
    ensure!(
        fa * fb < 0.0,
        "Brent: root not bracketed by f({a}) = {fa} and f({b}) = {fb}"
    );

    // c is the contrapoint: f(c) always has the opposite sign of f(b).
    let (mut c, mut fc) = (a, fa);

    for _ in 0..MAX_ITERATIONS {
        let prev_step = b - a;

        if fc.abs() < fb.abs() {
            (a, b, c) = (b, c, b);
            (fa, fb, fc) = (fb, fc, fb);
        }

        let tol = 1e-15 * b.abs() + 0.5 * acc;
        let mut step = 0.5 * (c - b);
        if step.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }

        if prev_step.abs() > tol && fa.abs() > fb.abs() {
            let cb = c - b;
            let (mut p, mut q) = if a == c {
                let t = fb / fa;
                (cb * t, 1.0 - t)
            } else {
                let q = fa / fc;
                let t1 = fb / fc;
                let t2 = fb / fa;
                (
                    t2 * (cb * q * (q - t1) - (b - a) * (t1 - 1.0)),
                    (q - 1.0) * (t1 - 1.0) * (t2 - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }
            if p < 0.75 * cb * q - 0.5 * (tol * q).abs() && p < (0.5 * prev_step * q).abs() {
                step = p / q;
            }
        }

        if step.abs() < tol {
            step = if step > 0.0 { tol } else { -tol };
        }

        a = b;
        fa = fb;
        b += step;
        fb = f(b);

        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            c = a;
            fc = fa;
        }
    }
    fail!("Brent solver: maximum iterations reached")
}

// ── Secant ────────────────────────────────────────────────────────────────────

/// Secant method started from a single guess `x0`.
///
/// The second point is `x0` nudged by a relative and absolute step of `1e-4`.
/// Used to polish a root that a bracketing method has already located.
pub fn secant<F>(f: F, x0: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = accuracy_or_default(accuracy);
    const H: Real = 1e-4;

    let mut p0 = x0;
    let mut p1 = x0 * (1.0 + H);
    p1 += if p1 >= 0.0 { H } else { -H };
    let mut q0 = f(p0);
    let mut q1 = f(p1);
    if q1.abs() < q0.abs() {
        std::mem::swap(&mut p0, &mut p1);
        std::mem::swap(&mut q0, &mut q1);
    }

    for _ in 0..SECANT_MAX_ITERATIONS {
        if q0 == q1 {
            if p0 == p1 {
                return Ok(p0);
            }
            fail!("Secant: flat function between {p0} and {p1}");
        }
        let x = if q1.abs() > q0.abs() {
            (p0 - q0 / q1 * p1) / (1.0 - q0 / q1)
        } else {
            (p1 - q1 / q0 * p0) / (1.0 - q1 / q0)
        };
        if !x.is_finite() {
            fail!("Secant: iterate left the real line");
        }
        if (x - p0).abs() <= acc {
            return Ok(x);
        }
        p0 = p1;
        q0 = q1;
        p1 = x;
        q1 = f(p1);
    }

    fail!("Secant solver: maximum iterations reached")
}
