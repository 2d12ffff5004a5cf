//! Human-entered lengths: decimal or mixed-fraction inches.
//!
//! Customers type sizes the way a tape measure reads them (`12 1/2`), the
//! way a spreadsheet does (`12.5`), or as a bare fraction (`3/8`). Everything
//! is normalized to decimal inches before it reaches the geometry modules.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use num_traits::Float;

/// Why a length string could not be read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseLengthError {
    /// Nothing but whitespace (or a bare unit suffix).
    Empty,
    /// Not a decimal, whole number, fraction, or mixed fraction.
    Malformed,
    /// A fraction with a zero denominator, such as `1/0`.
    ZeroDenominator,
    /// Lengths cannot be negative.
    Negative,
}

impl fmt::Display for ParseLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "no length entered",
            Self::Malformed => "expected a length like 12, 12.5, 12 1/2, or 1/2",
            Self::ZeroDenominator => "fraction denominator cannot be zero",
            Self::Negative => "length cannot be negative",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseLengthError {}

/// Parse a length in inches.
///
/// Accepts `"12"`, `"12.5"`, `"12 1/2"`, and `"1/2"`, with an optional
/// trailing `"` or `in`.
///
/// ```
/// use matlayout::units::parse_fraction;
///
/// assert_eq!(parse_fraction("12 1/2"), Ok(12.5));
/// assert_eq!(parse_fraction("12.5\""), Ok(12.5));
/// assert_eq!(parse_fraction("3/8"), Ok(0.375));
/// ```
pub fn parse_fraction(input: &str) -> Result<f64, ParseLengthError> {
    let cleaned = strip_unit(input.trim());
    if cleaned.is_empty() {
        return Err(ParseLengthError::Empty);
    }

    if cleaned.contains('.') {
        let value: f64 = cleaned.parse().map_err(|_| ParseLengthError::Malformed)?;
        if !value.is_finite() {
            return Err(ParseLengthError::Malformed);
        }
        if value < 0.0 {
            return Err(ParseLengthError::Negative);
        }
        return Ok(value);
    }

    if cleaned.starts_with('-') {
        return Err(ParseLengthError::Negative);
    }

    let mut parts = cleaned.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(single), None, None) if single.contains('/') => parse_simple_fraction(single),
        (Some(single), None, None) => parse_whole(single),
        (Some(whole), Some(frac), None) => Ok(parse_whole(whole)? + parse_simple_fraction(frac)?),
        _ => Err(ParseLengthError::Malformed),
    }
}

fn strip_unit(s: &str) -> &str {
    let s = s.strip_suffix('"').unwrap_or(s);
    let s = match s.len().checked_sub(2) {
        Some(i) if s.get(i..).is_some_and(|tail| tail.eq_ignore_ascii_case("in")) => &s[..i],
        _ => s,
    };
    s.trim_end()
}

fn parse_whole(s: &str) -> Result<f64, ParseLengthError> {
    s.parse::<u32>()
        .map(f64::from)
        .map_err(|_| ParseLengthError::Malformed)
}

fn parse_simple_fraction(s: &str) -> Result<f64, ParseLengthError> {
    let (num, den) = s.split_once('/').ok_or(ParseLengthError::Malformed)?;
    let num = num.parse::<u32>().map_err(|_| ParseLengthError::Malformed)?;
    let den = den.parse::<u32>().map_err(|_| ParseLengthError::Malformed)?;
    if den == 0 {
        return Err(ParseLengthError::ZeroDenominator);
    }
    Ok(f64::from(num) / f64::from(den))
}

/// Eighth-inch fractions in lowest terms, indexed by thousandths.
const EIGHTHS: [(i64, &str); 7] = [
    (125, "1/8"),
    (250, "1/4"),
    (375, "3/8"),
    (500, "1/2"),
    (625, "5/8"),
    (750, "3/4"),
    (875, "7/8"),
];

/// Format inches for display.
///
/// Whole numbers print bare, eighths print as a mixed fraction, anything
/// else falls back to two decimals.
///
/// ```
/// use matlayout::units::format_dimension;
///
/// assert_eq!(format_dimension(12.0), "12");
/// assert_eq!(format_dimension(12.5), "12 1/2");
/// assert_eq!(format_dimension(0.375), "3/8");
/// assert_eq!(format_dimension(3.3), "3.30");
/// ```
pub fn format_dimension(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value < 0.0 {
        return format!("-{}", format_dimension(-value));
    }

    let whole = Float::floor(value);
    let decimal = value - whole;
    if decimal == 0.0 {
        return format!("{}", whole as u64);
    }

    let thousandths = Float::round(decimal * 1000.0) as i64;
    match EIGHTHS.iter().find(|(t, _)| *t == thousandths) {
        Some((_, frac)) if whole == 0.0 => frac.to_string(),
        Some((_, frac)) => format!("{} {frac}", whole as u64),
        None => format!("{value:.2}"),
    }
}

/// Whether `value` is a number within `min..=max`.
pub fn is_valid_dimension(value: f64, min: f64, max: f64) -> bool {
    !value.is_nan() && value >= min && value <= max
}
