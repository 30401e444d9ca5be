use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ErrorPolicy;
use crate::core::functions::{MathFunction, factorial, power};
use crate::error::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 4,
        }
    }

    #[must_use]
    pub fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

/// Precedence of prefix negation: above `*`/`/`, below `^`, so `-2^2 == -4`.
pub const NEGATE_PRECEDENCE: u8 = 3;

/// Expression tree produced by the structured parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Negate(Box<Expr>),
    Factorial(Box<Expr>),
    Call {
        function: MathFunction,
        argument: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[must_use]
    pub fn call(function: MathFunction, argument: Expr) -> Self {
        Self::Call {
            function,
            argument: Box::new(argument),
        }
    }

    /// Evaluates the tree with the given variable bindings.
    ///
    /// Under [`ErrorPolicy::Lenient`] division by zero yields `0`, factorial
    /// of a negative yields `0` and other domain problems produce the IEEE
    /// result. [`ErrorPolicy::Strict`] reports them instead.
    pub fn evaluate(&self, variables: &[(&str, f64)], errors: ErrorPolicy) -> CalcResult<f64> {
        let strict = errors == ErrorPolicy::Strict;
        match self {
            Self::Number(value) => Ok(*value),
            Self::Variable(name) => {
                match variables.iter().find(|(bound, _)| *bound == name.as_str()) {
                    Some((_, value)) => Ok(*value),
                    None if strict => Err(CalcError::malformed(
                        name,
                        format!("unbound variable `{name}`"),
                    )),
                    None => Ok(f64::NAN),
                }
            }
            Self::Negate(inner) => Ok(-inner.evaluate(variables, errors)?),
            Self::Factorial(inner) => {
                let value = inner.evaluate(variables, errors)?;
                if strict && !(value.is_finite() && value >= 0.0 && value.fract() == 0.0) {
                    return Err(CalcError::DomainError {
                        function: "factorial",
                        argument: value,
                    });
                }
                Ok(factorial(value.trunc() as i64))
            }
            Self::Call { function, argument } => {
                let value = argument.evaluate(variables, errors)?;
                if strict && !function.accepts(value) {
                    return Err(CalcError::DomainError {
                        function: function.name(),
                        argument: value,
                    });
                }
                Ok(function.apply(value))
            }
            Self::Binary { op, lhs, rhs } => {
                let left = lhs.evaluate(variables, errors)?;
                let right = rhs.evaluate(variables, errors)?;
                match op {
                    BinaryOp::Add => Ok(left + right),
                    BinaryOp::Sub => Ok(left - right),
                    BinaryOp::Mul => Ok(left * right),
                    BinaryOp::Div if right == 0.0 => {
                        if strict {
                            Err(CalcError::DivisionByZero)
                        } else {
                            Ok(0.0)
                        }
                    }
                    BinaryOp::Div => Ok(left / right),
                    BinaryOp::Pow => {
                        let value = power(left, right);
                        if strict && value.is_nan() && !left.is_nan() && !right.is_nan() {
                            return Err(CalcError::DomainError {
                                function: "pow",
                                argument: left,
                            });
                        }
                        Ok(value)
                    }
                }
            }
        }
    }
}

/// Fully parenthesized rendering, handy for tracing parse structure.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => f.write_str(name),
            Self::Negate(inner) => write!(f, "(-{inner})"),
            Self::Factorial(inner) => write!(f, "({inner}!)"),
            Self::Call { function, argument } => write!(f, "{}({argument})", function.name()),
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
        }
    }
}
