//! Number formatting for text boxes and messages.

use dx_core::Real;

/// Format `v` with `digits` significant figures.
///
/// Small and large magnitudes switch to exponent notation (`1.235e+5`,
/// `1.000e-7`) the way a browser's `toPrecision` does: when the decimal
/// exponent is below -6 or at least `digits`.
pub fn to_precision(v: Real, digits: usize) -> String {
    let digits = digits.max(1);
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    // Round once in scientific form so the exponent reflects carries.
    let sci = format!("{:.*e}", digits - 1, v);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if exponent < -6 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        format!("{v:.decimals$}")
    }
}

/// `v` rounded to `digits` significant figures.
pub fn round_to_precision(v: Real, digits: usize) -> Real {
    to_precision(v, digits).parse().unwrap_or(v)
}
