//! Result and display formatting.
//!
//! Two distinct passes live here. [`stringify_result`] runs once per
//! computed value and decides between exponential notation and a
//! noise-suppressing rounded decimal. [`display_operand`] runs on every
//! render and only dresses the stored operand string up with thousands
//! separators - it never changes what the engine holds.

use crate::core::MathFault;

/// Magnitudes strictly above this render in exponential notation
const EXPONENTIAL_ABOVE: f64 = 1e12;
/// Non-zero magnitudes strictly below this render in exponential notation
const EXPONENTIAL_BELOW: f64 = 1e-6;
/// Rounding scale: eight decimal places
const ROUND_SCALE: f64 = 1e8;

/// Converts a computed value into the operand string the engine stores.
///
/// Very large and very small magnitudes use exponential notation with
/// five digits of mantissa precision; everything else is rounded to
/// eight decimal places to suppress binary floating-point noise and
/// rendered as a plain decimal.
#[must_use]
pub fn stringify_result(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude > EXPONENTIAL_ABOVE || (magnitude > 0.0 && magnitude < EXPONENTIAL_BELOW) {
        format!("{value:.5e}")
    } else {
        let rounded = (value * ROUND_SCALE).round() / ROUND_SCALE;
        rounded.to_string()
    }
}

/// Formats a stored operand for the display.
///
/// Fault markers pass through unchanged. Otherwise the integer part is
/// grouped with thousands separators and the fractional part - including
/// the empty fraction of a trailing point - is reattached verbatim.
#[must_use]
pub fn display_operand(operand: &str) -> String {
    if MathFault::from_marker(operand).is_some() {
        return operand.to_string();
    }

    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let grouped = group_integer(integer);
    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

/// Groups an integer-part string with `,` separators.
///
/// A part that is not a plain digit run (empty, or mid-entry artifacts
/// such as `NaN`) displays as "0", matching how a numeric re-render also
/// collapses leading zeros.
fn group_integer(raw: &str) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return "0".to_string();
    }

    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() {
        "0"
    } else {
        significant
    };

    let mut grouped = String::with_capacity(sign.len() + significant.len() + significant.len() / 3);
    grouped.push_str(sign);
    for (index, ch) in significant.chars().enumerate() {
        if index > 0 && (significant.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== stringify_result: plain path =====

    #[test]
    fn test_result_integer_has_no_trailing_fraction() {
        assert_eq!(stringify_result(12.0), "12");
    }

    #[test]
    fn test_result_negative_integer() {
        assert_eq!(stringify_result(-42.0), "-42");
    }

    #[test]
    fn test_result_zero() {
        assert_eq!(stringify_result(0.0), "0");
    }

    #[test]
    fn test_result_suppresses_binary_noise() {
        // The canonical 0.1 + 0.2 case
        assert_eq!(stringify_result(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_result_rounds_to_eight_places() {
        assert_eq!(stringify_result(1.234_567_891), "1.23456789");
    }

    #[test]
    fn test_result_keeps_short_decimals() {
        assert_eq!(stringify_result(3.14), "3.14");
    }

    // ===== stringify_result: exponential path =====

    #[test]
    fn test_result_boundary_stays_plain() {
        // The boundary is strictly greater than 1e12
        assert_eq!(stringify_result(1e12), "1000000000000");
    }

    #[test]
    fn test_result_above_boundary_goes_exponential() {
        assert_eq!(stringify_result(1.000_000_1e12), "1.00000e12");
    }

    #[test]
    fn test_result_large_negative_goes_exponential() {
        assert_eq!(stringify_result(-2e12), "-2.00000e12");
    }

    #[test]
    fn test_result_small_magnitude_goes_exponential() {
        assert_eq!(stringify_result(1e-7), "1.00000e-7");
    }

    #[test]
    fn test_result_small_boundary_stays_plain() {
        // 1e-6 itself is not strictly below the threshold
        assert_eq!(stringify_result(1e-6), "0.000001");
    }

    #[test]
    fn test_result_small_negative_goes_exponential() {
        assert_eq!(stringify_result(-5e-7), "-5.00000e-7");
    }

    // ===== display_operand =====

    #[test]
    fn test_display_fault_markers_pass_through() {
        assert_eq!(display_operand("Division by zero"), "Division by zero");
        assert_eq!(display_operand("Imaginary number"), "Imaginary number");
    }

    #[test]
    fn test_display_groups_integer_part() {
        assert_eq!(display_operand("1234567.5"), "1,234,567.5");
    }

    #[test]
    fn test_display_grouping_thresholds() {
        assert_eq!(display_operand("999"), "999");
        assert_eq!(display_operand("1000"), "1,000");
        assert_eq!(display_operand("1000000"), "1,000,000");
    }

    #[test]
    fn test_display_short_operands_unchanged() {
        assert_eq!(display_operand("0"), "0");
        assert_eq!(display_operand("7"), "7");
        assert_eq!(display_operand("42.25"), "42.25");
    }

    #[test]
    fn test_display_preserves_trailing_point() {
        assert_eq!(display_operand("12."), "12.");
        assert_eq!(display_operand("1234."), "1,234.");
    }

    #[test]
    fn test_display_preserves_fraction_verbatim() {
        // Trailing zeros the user typed stay on screen
        assert_eq!(display_operand("1.500"), "1.500");
    }

    #[test]
    fn test_display_bare_point() {
        assert_eq!(display_operand("."), "0.");
    }

    #[test]
    fn test_display_empty_integer_part() {
        assert_eq!(display_operand(".5"), "0.5");
    }

    #[test]
    fn test_display_negative_operands() {
        assert_eq!(display_operand("-1234"), "-1,234");
        assert_eq!(display_operand("-0.5"), "-0.5");
    }

    #[test]
    fn test_display_collapses_leading_zeros() {
        assert_eq!(display_operand("0042"), "42");
    }

    #[test]
    fn test_display_empty_renders_zero() {
        assert_eq!(display_operand(""), "0");
    }

    #[test]
    fn test_display_non_numeric_integer_renders_zero() {
        // A NaN left by remainder-by-zero displays as 0
        assert_eq!(display_operand("NaN"), "0");
    }

    #[test]
    fn test_display_exponential_result_survives() {
        assert_eq!(display_operand("1.00000e12"), "1.00000e12");
    }
}
