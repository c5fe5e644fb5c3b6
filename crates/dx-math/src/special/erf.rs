//! Error function and its inverse.

use dx_core::Real;
use std::f64::consts::FRAC_1_SQRT_2;

const ERF_COEFFICIENTS: [Real; 9] = [
    1.000_023_68,
    0.374_091_96,
    0.096_784_18,
    -0.186_288_06,
    0.278_868_07,
    -1.135_203_98,
    1.488_515_87,
    -0.822_152_23,
    0.170_872_77,
];

/// Error function.
///
/// Nine-term Chebyshev-fitted approximation of the complementary error
/// function (Numerical Recipes `erfcc`), accurate to about `1.2e-7`.
/// `erf(0)` is exactly zero.
pub fn erf(x: Real) -> Real {
    if x == 0.0 {
        return 0.0;
    }
    let t = 1.0 / (1.0 + 0.5 * x.abs());
    let mut exponent = -x * x - 1.265_512_23;
    let mut tk = 1.0;
    for a in ERF_COEFFICIENTS {
        tk *= t;
        exponent += a * tk;
    }
    let result = 1.0 - t * exponent.exp();
    if x < 0.0 {
        -result
    } else {
        result
    }
}

/// Inverse error function.
///
/// Wichura's algorithm AS 241 (PPND7) applied to `(x + 1) / 2`, accurate
/// to about seven significant figures. Returns `±∞` at `±1` and NaN outside
/// `[-1, 1]`.
pub fn erf_inv(x: Real) -> Real {
    let p = (x + 1.0) / 2.0;
    if p == 0.0 {
        return Real::NEG_INFINITY;
    }
    if p == 1.0 {
        return Real::INFINITY;
    }
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return Real::NAN;
    }

    const SPLIT1: Real = 0.425;
    const SPLIT2: Real = 5.0;
    const CONST1: Real = 0.180_625;
    const CONST2: Real = 1.6;

    // p close to 1/2
    const A: [Real; 4] = [3.387_132_717_9, 5.043_427_193_8e1, 1.592_911_320_2e2, 5.910_937_472_0e1];
    const B: [Real; 3] = [1.789_516_946_9e1, 7.875_775_766_4e1, 6.718_756_360_0e1];
    // intermediate tail
    const C: [Real; 4] = [1.423_437_277_7, 2.756_815_390_0, 1.306_728_481_6, 1.702_382_110_3e-1];
    const D: [Real; 2] = [7.370_016_425_0e-1, 1.202_113_297_5e-1];
    // far tail
    const E: [Real; 4] = [6.657_905_115_0, 3.081_226_386_0, 4.286_829_433_7e-1, 1.733_720_399_7e-2];
    const F: [Real; 2] = [2.419_789_422_5e-1, 1.225_820_263_5e-2];

    let q = p - 0.5;
    let z = if q.abs() <= SPLIT1 {
        let r = CONST1 - q * q;
        q * (((A[3] * r + A[2]) * r + A[1]) * r + A[0])
            / (((B[2] * r + B[1]) * r + B[0]) * r + 1.0)
    } else {
        let r = if q < 0.0 { p } else { 1.0 - p };
        let r = (-r.ln()).sqrt();
        let tail = if r <= SPLIT2 {
            let r = r - CONST2;
            (((C[3] * r + C[2]) * r + C[1]) * r + C[0]) / ((D[1] * r + D[0]) * r + 1.0)
        } else {
            let r = r - SPLIT2;
            (((E[3] * r + E[2]) * r + E[1]) * r + E[0]) / ((F[1] * r + F[0]) * r + 1.0)
        };
        if q < 0.0 {
            -tail
        } else {
            tail
        }
    };

    // z is a standard normal quantile; erf⁻¹ is z / √2.
    FRAC_1_SQRT_2 * z
}
