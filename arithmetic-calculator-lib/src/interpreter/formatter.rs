/// Exponents at or above this are written in scientific notation.
const SCIENTIFIC_UPPER_EXPONENT: i32 = 6;
/// Exponents below this are written in scientific notation.
const SCIENTIFIC_LOWER_EXPONENT: i32 = -4;

/// Formats a number in the compact general representation used in responses.
///
/// The shortest digits that round-trip are used, in scientific notation when the decimal
/// exponent is below -4 or at least 6, and as a plain decimal otherwise. The exponent always
/// carries a sign and at least two digits.
///
/// # Examples
///
/// ```
/// use arithmetic_calculator::interpreter::formatter::format_general;
///
/// assert_eq!(format_general(14.0), "14");
/// assert_eq!(format_general(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_general(1234567.0), "1.234567e+06");
/// assert_eq!(format_general(f64::INFINITY), "+Inf");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let infinity = if value.is_sign_positive() { "+Inf" } else { "-Inf" };
        return infinity.to_string();
    }

    let scientific = format!("{:e}", value);
    let parts = scientific
        .split_once('e')
        .and_then(|(mantissa, exponent)| Some((mantissa, exponent.parse::<i32>().ok()?)));

    match parts {
        Some((mantissa, exponent))
            if exponent < SCIENTIFIC_LOWER_EXPONENT || exponent >= SCIENTIFIC_UPPER_EXPONENT =>
        {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        _ => value.to_string(),
    }
}
