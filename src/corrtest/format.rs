//! Number rendering for column annotations.

/// Significant digits used for charge values in annotations
pub const ANNOTATION_PRECISION: usize = 3;

/// Render `value` with `precision` significant digits in general format.
///
/// Fixed notation keeps at least one fractional digit; scientific notation
/// is used when the decimal exponent is below -4 or at least
/// `precision - 1`. Trailing zeros are dropped.
///
/// ```
/// use corrbook::corrtest::format::format_significant;
///
/// assert_eq!(format_significant(3.0, 3), "3.0");
/// assert_eq!(format_significant(0.000123456, 3), "0.000123");
/// assert_eq!(format_significant(123.4, 3), "1.23e+02");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let precision = precision.max(1);
    // Let the scientific formatter do the rounding so the exponent reflects
    // carries such as 9.996 -> 1.00e1.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 - 1 {
        let mantissa = strip_zeros(mantissa);
        let mantissa = mantissa.strip_suffix('.').unwrap_or(mantissa.as_str());
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        let fixed = strip_zeros(&format!("{:.*}", decimals, value));
        if fixed.ends_with('.') {
            format!("{}0", fixed)
        } else {
            fixed
        }
    }
}

/// Charge value as shown in annotations
pub fn format_charge(value: f64) -> String {
    format_significant(value, ANNOTATION_PRECISION)
}

fn strip_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').to_string()
    } else {
        s.to_string()
    }
}
