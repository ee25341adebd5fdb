//! Cell type classification.
//!
//! A cell is numeric when it parses as a finite decimal literal: optional
//! sign, digits with an optional decimal point, optional exponent.
//! Surrounding whitespace is ignored. Infinities, `NaN` and literals that
//! overflow `f64` are not numeric.

/// Parses a cell as a finite number, or `None` when it is not one.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim_ascii();
    if !looks_decimal(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn is_numeric(value: &str) -> bool {
    parse_numeric(value).is_some()
}

// `str::parse::<f64>` also accepts "inf", "infinity" and "nan" spelled in any
// case; those are rejected up front so only digit-based literals get through.
fn looks_decimal(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}
