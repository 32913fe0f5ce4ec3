//! Utility functions to format floating-point numbers.

use std::fmt::Write;
use super::{FormatOptions, Separator};

/// Trims trailing zeros from the fractional part of a string assumed to represent a single
/// number in decimal notation, along with the decimal point if nothing is left after it.
fn trim_trailing(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Inserts separators in a string representing the digits of a non-negative number.
pub fn insert_separators(s: &mut String) {
    let decimal = s.find('.').unwrap_or(s.len());
    s.reserve(s.len() / 3); // reserve space for the commas

    // go backwards from the decimal point (backwards to avoid having to deal with the string
    // growing in index computation), inserting commas every 3 digits
    let mut i = decimal.saturating_sub(3);
    while i > 0 {
        s.insert(i, ',');
        i = i.saturating_sub(3);
    }
}

/// Formats a float in decimal notation, rounded to at most `options.precision` fractional
/// digits, with trailing zeros removed.
pub fn fmt<W: Write>(f: &mut W, n: f64, options: FormatOptions) -> std::fmt::Result {
    if n.is_nan() {
        return write!(f, "NaN");
    } else if n.is_infinite() {
        return write!(f, "{}∞", if n.is_sign_negative() { "-" } else { "" });
    }

    let rounded = format!("{:.*}", options.precision, n.abs());
    let mut s = trim_trailing(&rounded).to_string();

    // values that round to zero are printed without a sign, including negative zero
    let negative = n.is_sign_negative() && s.chars().any(|c| c.is_ascii_digit() && c != '0');

    if options.separators == Separator::Always {
        insert_separators(&mut s);
    }
    write!(f, "{}{}", if negative { "-" } else { "" }, s)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::numerical::fmt::FormatOptionsBuilder;
    use super::*;

    fn format(n: f64, options: FormatOptions) -> String {
        let mut s = String::new();
        fmt(&mut s, n, options).unwrap();
        s
    }

    #[test]
    fn integers_have_no_fractional_part() {
        assert_eq!(format(2.0, FormatOptions::default()), "2");
        assert_eq!(format(-1.0, FormatOptions::default()), "-1");
        assert_eq!(format(100.0, FormatOptions::default()), "100");
    }

    #[test]
    fn at_most_four_digits() {
        assert_eq!(format(0.33333, FormatOptions::default()), "0.3333");
        assert_eq!(format(0.5, FormatOptions::default()), "0.5");
        assert_eq!(format(-2.25, FormatOptions::default()), "-2.25");
        assert_eq!(format(1.0 / 8.0, FormatOptions::default()), "0.125");
    }

    #[test]
    fn tiny_values_round_to_zero() {
        assert_eq!(format(0.00001, FormatOptions::default()), "0");
        assert_eq!(format(-0.00001, FormatOptions::default()), "0");
        assert_eq!(format(-0.0, FormatOptions::default()), "0");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format(f64::NAN, FormatOptions::default()), "NaN");
        assert_eq!(format(f64::INFINITY, FormatOptions::default()), "∞");
        assert_eq!(format(f64::NEG_INFINITY, FormatOptions::default()), "-∞");
    }

    #[test]
    fn custom_precision() {
        let opts = FormatOptionsBuilder::new()
            .precision(2)
            .build();
        assert_eq!(format(1.23456, opts), "1.23");

        let opts = FormatOptionsBuilder::new()
            .precision(0)
            .build();
        assert_eq!(format(2.4, opts), "2");
    }

    #[test]
    fn separators() {
        let opts = FormatOptionsBuilder::new()
            .separators(Separator::Always)
            .build();
        assert_eq!(format(37000000.0, opts), "37,000,000");
        assert_eq!(format(-1234567.125, opts), "-1,234,567.125");
        assert_eq!(format(999.0, opts), "999");
    }
}
