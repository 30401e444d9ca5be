//! Recursive text-splitting evaluator.
//!
//! There is no tokenizer: the text is split at the right-most additive
//! operator, then multiplicative, then `^`, and each half is evaluated
//! recursively. The scans do not track parenthesis depth, so `(2+3)*4` is
//! split at `+` first and evaluates to 12. That behavior is kept as-is for
//! [`Grammar::TextSplit`](crate::core::Grammar::TextSplit).

use crate::core::functions::{MathFunction, power};
use crate::core::number_format::{parse_numeric_prefix, parse_whole_number};
use crate::core::ErrorPolicy;
use crate::error::{CalcError, CalcResult};

const FUNCTION_PREFIXES: [(&str, MathFunction); 5] = [
    ("sin(", MathFunction::Sin),
    ("cos(", MathFunction::Cos),
    ("tan(", MathFunction::Tan),
    ("sqrt(", MathFunction::Sqrt),
    ("log(", MathFunction::Log),
];

/// Evaluates `text` with the text-splitting algorithm.
///
/// Blank input is zero under both policies.
pub fn evaluate(text: &str, errors: ErrorPolicy) -> CalcResult<f64> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    split_eval(text, errors == ErrorPolicy::Strict)
}

fn split_eval(text: &str, strict: bool) -> CalcResult<f64> {
    if strict && text.trim().is_empty() {
        return Err(CalcError::malformed(text, "missing operand"));
    }

    if let Some(value) = parse_whole_number(text) {
        return Ok(value);
    }

    let bytes = text.as_bytes();

    // Position 0 is skipped so a leading sign is never an operator.
    for i in (1..bytes.len()).rev() {
        if bytes[i] == b'+' || bytes[i] == b'-' {
            let lhs = split_eval(&text[..i], strict)?;
            let rhs = split_eval(&text[i + 1..], strict)?;
            return Ok(if bytes[i] == b'+' { lhs + rhs } else { lhs - rhs });
        }
    }

    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'*' => {
                let lhs = split_eval(&text[..i], strict)?;
                return Ok(lhs * split_eval(&text[i + 1..], strict)?);
            }
            b'/' => {
                let divisor = split_eval(&text[i + 1..], strict)?;
                if divisor == 0.0 {
                    if strict {
                        return Err(CalcError::DivisionByZero);
                    }
                    return Ok(0.0);
                }
                return Ok(split_eval(&text[..i], strict)? / divisor);
            }
            _ => {}
        }
    }

    if let Some(i) = text.rfind('^') {
        let base = split_eval(&text[..i], strict)?;
        let exponent = split_eval(&text[i + 1..], strict)?;
        let value = power(base, exponent);
        if strict && value.is_nan() && !base.is_nan() && !exponent.is_nan() {
            return Err(CalcError::DomainError {
                function: "pow",
                argument: base,
            });
        }
        return Ok(value);
    }

    for (prefix, function) in FUNCTION_PREFIXES {
        if !text.starts_with(prefix) {
            continue;
        }
        if let Some(end) = text.find(')') {
            let argument = split_eval(&text[prefix.len()..end], strict)?;
            if strict && !function.accepts(argument) {
                return Err(CalcError::DomainError {
                    function: function.name(),
                    argument,
                });
            }
            return Ok(function.apply(argument));
        }
    }

    let (value, consumed) = parse_numeric_prefix(text);
    if strict {
        return Err(CalcError::malformed(
            text,
            format!("unparsed text after offset {consumed}"),
        ));
    }
    Ok(value)
}

/// Replaces every standalone occurrence of `name` with `value` (4 decimals).
///
/// Negative values are inserted verbatim, so `2*x` at `x = -3` becomes
/// `2*-3.0000`, which this grammar splits at the `-`.
#[must_use]
pub fn substitute_variable(text: &str, name: &str, value: f64) -> String {
    if name.is_empty() {
        return text.to_owned();
    }
    let literal = format!("{value:.4}");
    let mut out = String::with_capacity(text.len() + literal.len());
    let mut rest = text;
    let mut previous: Option<char> = None;

    while let Some(found) = rest.find(name) {
        let before = rest[..found].chars().next_back().or(previous);
        let after = rest[found + name.len()..].chars().next();
        let standalone = !before.is_some_and(|c| c.is_ascii_alphabetic())
            && !after.is_some_and(|c| c.is_ascii_alphabetic());

        out.push_str(&rest[..found]);
        if standalone {
            out.push_str(&literal);
        } else {
            out.push_str(name);
        }
        previous = name.chars().next_back();
        rest = &rest[found + name.len()..];
    }
    out.push_str(rest);
    out
}
