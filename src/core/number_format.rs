//! Numeric text primitives shared by the evaluators and the display.

/// Significant digits used for displayed results.
pub const DISPLAY_SIGNIFICANT_DIGITS: usize = 8;

/// Parses the longest numeric prefix of `text`, C `strtod` style.
///
/// Returns the value and the number of bytes consumed. Leading ASCII
/// whitespace, an optional sign, a decimal mantissa with optional exponent and
/// the `inf`/`infinity`/`nan` spellings are recognized. When nothing converts
/// the result is `(0.0, 0)`.
#[must_use]
pub fn parse_numeric_prefix(text: &str) -> (f64, usize) {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    let number_start = i;
    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    if let Some((value, len)) = parse_special(&text[i..]) {
        let value = if negative { -value } else { value };
        return (value, i + len);
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return (0.0, 0);
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exponent_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_start {
            i = j;
        }
    }

    match text[number_start..i].parse::<f64>() {
        Ok(value) => (value, i),
        Err(_) => (0.0, 0),
    }
}

fn parse_special(text: &str) -> Option<(f64, usize)> {
    let starts_with = |word: &str| {
        text.len() >= word.len()
            && text.as_bytes()[..word.len()].eq_ignore_ascii_case(word.as_bytes())
    };
    if starts_with("infinity") {
        Some((f64::INFINITY, 8))
    } else if starts_with("inf") {
        Some((f64::INFINITY, 3))
    } else if starts_with("nan") {
        Some((f64::NAN, 3))
    } else {
        None
    }
}

/// Returns the value when the whole of `text` is one numeric literal.
///
/// Empty text counts as a literal zero.
#[must_use]
pub fn parse_whole_number(text: &str) -> Option<f64> {
    let (value, consumed) = parse_numeric_prefix(text);
    (consumed == text.len()).then_some(value)
}

/// Formats `value` with `significant` digits the way C's `%.<n>g` does.
///
/// Trailing zeros are stripped, exponents below -4 or at/above the precision
/// switch to scientific notation with a signed, two-digit exponent.
#[must_use]
pub fn format_significant(value: f64, significant: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let precision = significant.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

/// Formats a result for the calculator display (8 significant digits).
#[must_use]
pub fn format_display(value: f64) -> String {
    format_significant(value, DISPLAY_SIGNIFICANT_DIGITS)
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
