use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::expr::Expr;
use crate::core::parser::parse_expression;
use crate::core::text_split;
use crate::error::{CalcError, CalcResult};

/// Which algorithm turns expression text into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Grammar {
    /// Recursive right-to-left text splitting. Not parenthesis-aware, so
    /// `(2+3)*4` is 12; kept as the keypad's historical behavior.
    #[default]
    TextSplit,
    /// Tokenizer plus shunting-yard parser with explicit grouping, unary
    /// minus, right-associative `^` and postfix `!`. Opt-in.
    Precedence,
}

/// What happens when an expression cannot be evaluated cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ErrorPolicy {
    /// Always produce a best-effort number.
    #[default]
    Lenient,
    /// Report division by zero, malformed text and domain violations.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EvaluationPolicy {
    #[serde(default)]
    pub grammar: Grammar,
    #[serde(default)]
    pub errors: ErrorPolicy,
}

impl EvaluationPolicy {
    #[must_use]
    pub fn new(grammar: Grammar, errors: ErrorPolicy) -> Self {
        Self { grammar, errors }
    }
}

/// Expression evaluator bound to one [`EvaluationPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    policy: EvaluationPolicy,
}

impl Evaluator {
    #[must_use]
    pub fn new(policy: EvaluationPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(self) -> EvaluationPolicy {
        self.policy
    }

    /// Lenient evaluation: always returns a number, whatever the configured
    /// error policy.
    #[must_use]
    pub fn evaluate(self, text: &str) -> f64 {
        match evaluate_text(text, &[], self.policy.grammar, ErrorPolicy::Lenient) {
            Ok(value) => value,
            Err(err) => {
                debug!(error = %err, "lenient evaluation fell back to zero");
                0.0
            }
        }
    }

    /// Evaluates under the configured error policy.
    pub fn try_evaluate(self, text: &str) -> CalcResult<f64> {
        self.try_evaluate_with(text, &[])
    }

    /// Evaluates with free variables bound, e.g. `[("x", 2.0)]`.
    pub fn try_evaluate_with(self, text: &str, variables: &[(&str, f64)]) -> CalcResult<f64> {
        evaluate_text(text, variables, self.policy.grammar, self.policy.errors)
    }

    /// Prepares `text` for repeated evaluation over one free variable.
    ///
    /// The structured grammar parses once; the text-splitting grammar
    /// substitutes the variable textually on every call.
    #[must_use]
    pub fn prepare(self, text: &str, variable: &str) -> PreparedExpression {
        let body = match self.policy.grammar {
            Grammar::TextSplit => PreparedBody::Text(text.to_owned()),
            Grammar::Precedence => match parse_expression(text, &[variable], self.policy.errors) {
                Ok(expr) => PreparedBody::Tree(expr),
                Err(err) => PreparedBody::Invalid(err),
            },
        };
        PreparedExpression {
            variable: variable.to_owned(),
            errors: self.policy.errors,
            body,
        }
    }
}

/// Lenient evaluation with the default grammar.
#[must_use]
pub fn evaluate(text: &str) -> f64 {
    Evaluator::default().evaluate(text)
}

fn evaluate_text(
    text: &str,
    variables: &[(&str, f64)],
    grammar: Grammar,
    errors: ErrorPolicy,
) -> CalcResult<f64> {
    let value = match grammar {
        Grammar::TextSplit => {
            let mut substituted = text.to_owned();
            for (name, value) in variables {
                substituted = text_split::substitute_variable(&substituted, name, *value);
            }
            text_split::evaluate(&substituted, errors)?
        }
        Grammar::Precedence => {
            let names: SmallVec<[&str; 4]> = variables.iter().map(|(name, _)| *name).collect();
            parse_expression(text, &names, errors)?.evaluate(variables, errors)?
        }
    };
    trace!(?grammar, input = text, value, "evaluated expression");
    Ok(value)
}

#[derive(Debug, Clone, PartialEq)]
enum PreparedBody {
    Tree(Expr),
    Text(String),
    Invalid(CalcError),
}

/// Expression ready to be evaluated at many values of one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedExpression {
    variable: String,
    errors: ErrorPolicy,
    body: PreparedBody,
}

impl PreparedExpression {
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn evaluate_at(&self, value: f64) -> CalcResult<f64> {
        let bindings = [(self.variable.as_str(), value)];
        match &self.body {
            PreparedBody::Tree(expr) => expr.evaluate(&bindings, self.errors),
            PreparedBody::Text(text) => {
                let substituted = text_split::substitute_variable(text, &self.variable, value);
                text_split::evaluate(&substituted, self.errors)
            }
            PreparedBody::Invalid(err) => Err(err.clone()),
        }
    }
}
