//! Stateless numeric primitives behind the calculator keys.
//!
//! Trigonometry takes degrees, matching what users type on the keypad.

use serde::{Deserialize, Serialize};

/// Literal appended by the `π` key.
pub const PI_LITERAL: &str = "3.14159265";
/// Literal appended by the `e` key.
pub const E_LITERAL: &str = "2.71828183";

#[must_use]
pub fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

#[must_use]
pub fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

#[must_use]
pub fn tan_deg(x: f64) -> f64 {
    x.to_radians().tan()
}

/// Base-10 logarithm.
#[must_use]
pub fn log(x: f64) -> f64 {
    x.log10()
}

/// Natural logarithm.
#[must_use]
pub fn ln(x: f64) -> f64 {
    x.ln()
}

#[must_use]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[must_use]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Iterative factorial in floating point.
///
/// Negative input yields `0.0`. From `n = 171` upward the product is
/// `f64::INFINITY`; the loop stops there, so huge `n` return immediately.
#[must_use]
pub fn factorial(n: i64) -> f64 {
    if n < 0 {
        return 0.0;
    }
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
        if result.is_infinite() {
            break;
        }
    }
    result
}

/// Single-argument functions reachable from expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MathFunction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
    Ln,
}

impl MathFunction {
    pub const ALL: [Self; 6] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Log,
        Self::Ln,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => sin_deg(x),
            Self::Cos => cos_deg(x),
            Self::Tan => tan_deg(x),
            Self::Sqrt => sqrt(x),
            Self::Log => log(x),
            Self::Ln => ln(x),
        }
    }

    /// Whether `x` lies inside the real domain of the function.
    #[must_use]
    pub fn accepts(self, x: f64) -> bool {
        match self {
            Self::Sin | Self::Cos | Self::Tan => x.is_finite() || x.is_nan(),
            Self::Sqrt => x >= 0.0 || x.is_nan(),
            Self::Log | Self::Ln => x > 0.0 || x.is_nan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MathFunction, factorial};

    #[test]
    fn factorial_overflows_to_infinity_without_panicking() {
        assert!(factorial(170).is_finite());
        assert_eq!(factorial(171), f64::INFINITY);
    }

    #[test]
    fn factorial_of_huge_input_returns_immediately() {
        assert_eq!(factorial(i64::MAX), f64::INFINITY);
    }

    #[test]
    fn function_names_round_trip() {
        for function in MathFunction::ALL {
            assert_eq!(MathFunction::from_name(function.name()), Some(function));
        }
        assert_eq!(MathFunction::from_name("exp"), None);
    }
}
