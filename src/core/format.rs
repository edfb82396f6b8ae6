//! Label text for counts and axis ticks.

use chrono::{Datelike, NaiveDate};

/// Integer with `,` thousands separators: `1234567` -> `"1,234,567"`.
#[must_use]
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

/// Numeric tick label: integers without a fraction, other values with up to
/// six significant decimals and trailing zeros removed.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    // Values that round to zero, e.g. -1e-7, must not print as "-0".
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(trimmed.len() + integer.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Date tick label: the year on January 1st, the month name on the first of
/// a month, and `"Apr 15"` otherwise.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    if date.ordinal() == 1 {
        date.format("%Y").to_string()
    } else if date.day() == 1 {
        date.format("%B").to_string()
    } else {
        date.format("%b %d").to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
