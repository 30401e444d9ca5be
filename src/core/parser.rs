//! Shunting-yard parser building an [`Expr`] tree.
//!
//! The parser is iterative: operands and pending operators live on explicit
//! stacks and parenthesis nesting is tracked by `depth`. In lenient mode it
//! recovers the way the keypad flow expects:
//! - a missing operand is a literal `0`
//! - unclosed parentheses are closed at end of input
//! - an unmatched `)` or an unexpected token ends the expression

use std::f64::consts::{E, PI};

use smallvec::SmallVec;
use tracing::trace;

use crate::core::ErrorPolicy;
use crate::core::expr::{BinaryOp, Expr, NEGATE_PRECEDENCE};
use crate::core::functions::MathFunction;
use crate::core::lexer::{Token, tokenize};
use crate::error::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Binary(BinaryOp),
    Negate,
    Group,
    Call(MathFunction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

enum Name<'v> {
    Constant(f64),
    Function(MathFunction),
    Variable(&'v str),
}

/// Parses `text` into an expression tree.
///
/// `variables` lists the free names the caller will bind at evaluation time.
/// Blank text parses to `0`.
pub fn parse_expression(
    text: &str,
    variables: &[&str],
    errors: ErrorPolicy,
) -> CalcResult<Expr> {
    let lexed = tokenize(text);
    if let Some(offset) = lexed.stopped_at {
        if errors == ErrorPolicy::Strict {
            let found = text[offset..].chars().next().unwrap_or_default();
            return Err(CalcError::malformed(
                text,
                format!("unexpected character `{found}` at offset {offset}"),
            ));
        }
        trace!(offset, "ignoring unlexable tail");
    }
    if lexed.tokens.is_empty() && lexed.stopped_at.is_none() {
        return Ok(Expr::Number(0.0));
    }

    let mut parser = ShuntingYard::new(text, variables, errors);
    for token in &lexed.tokens {
        if parser.push(token)? == Flow::Stop {
            trace!(depth = parser.depth, "expression ended early");
            break;
        }
    }
    parser.finish()
}

struct ShuntingYard<'a> {
    input: &'a str,
    variables: &'a [&'a str],
    strict: bool,
    operands: Vec<Expr>,
    operators: SmallVec<[StackEntry; 16]>,
    pending_call: Option<MathFunction>,
    depth: usize,
    expect_operand: bool,
}

impl<'a> ShuntingYard<'a> {
    fn new(input: &'a str, variables: &'a [&'a str], errors: ErrorPolicy) -> Self {
        Self {
            input,
            variables,
            strict: errors == ErrorPolicy::Strict,
            operands: Vec::new(),
            operators: SmallVec::new(),
            pending_call: None,
            depth: 0,
            expect_operand: true,
        }
    }

    fn push(&mut self, token: &Token) -> CalcResult<Flow> {
        if let Some(function) = self.pending_call.take() {
            if *token != Token::LParen {
                return self.reject(format!("`{}` must be followed by `(`", function.name()));
            }
            self.operators.push(StackEntry::Call(function));
            self.depth += 1;
            return Ok(Flow::Continue);
        }

        if self.expect_operand {
            self.push_operand(token)
        } else {
            self.push_operator(token)
        }
    }

    fn push_operand(&mut self, token: &Token) -> CalcResult<Flow> {
        match token {
            Token::Number(value) => self.accept_operand(Expr::Number(*value)),
            Token::Name(name) => match self.resolve(name) {
                Some(Name::Constant(value)) => self.accept_operand(Expr::Number(value)),
                Some(Name::Variable(name)) => {
                    self.accept_operand(Expr::Variable(name.to_owned()))
                }
                Some(Name::Function(function)) => {
                    self.pending_call = Some(function);
                    Ok(Flow::Continue)
                }
                None => self.reject(format!("unknown name `{name}`")),
            },
            Token::LParen => {
                self.operators.push(StackEntry::Group);
                self.depth += 1;
                Ok(Flow::Continue)
            }
            Token::Minus => {
                self.operators.push(StackEntry::Negate);
                Ok(Flow::Continue)
            }
            Token::Plus => Ok(Flow::Continue),
            Token::Star | Token::Slash | Token::Caret | Token::RParen | Token::Bang => {
                if self.strict {
                    return Err(CalcError::malformed(self.input, "missing operand"));
                }
                self.accept_operand(Expr::Number(0.0))?;
                self.push_operator(token)
            }
        }
    }

    fn push_operator(&mut self, token: &Token) -> CalcResult<Flow> {
        let op = match token {
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Sub,
            Token::Star => BinaryOp::Mul,
            Token::Slash => BinaryOp::Div,
            Token::Caret => BinaryOp::Pow,
            Token::Bang => {
                let operand = self.pop_operand()?;
                self.operands.push(Expr::Factorial(Box::new(operand)));
                return Ok(Flow::Continue);
            }
            Token::RParen => return self.close_group(),
            Token::Number(_) | Token::Name(_) | Token::LParen => {
                return self.reject("missing operator");
            }
        };

        while let Some(&top) = self.operators.last() {
            let binds_tighter = match top {
                StackEntry::Binary(pending) => {
                    pending.precedence() > op.precedence()
                        || (pending.precedence() == op.precedence() && !op.is_right_associative())
                }
                StackEntry::Negate => NEGATE_PRECEDENCE > op.precedence(),
                StackEntry::Group | StackEntry::Call(_) => false,
            };
            if !binds_tighter {
                break;
            }
            self.operators.pop();
            self.apply(top)?;
        }

        self.operators.push(StackEntry::Binary(op));
        self.expect_operand = true;
        Ok(Flow::Continue)
    }

    fn close_group(&mut self) -> CalcResult<Flow> {
        if self.depth == 0 {
            return self.reject("unmatched `)`");
        }
        while let Some(top) = self.operators.pop() {
            match top {
                StackEntry::Group => break,
                StackEntry::Call(function) => {
                    let argument = self.pop_operand()?;
                    self.operands.push(Expr::call(function, argument));
                    break;
                }
                StackEntry::Binary(_) | StackEntry::Negate => self.apply(top)?,
            }
        }
        self.depth -= 1;
        Ok(Flow::Continue)
    }

    fn finish(mut self) -> CalcResult<Expr> {
        if let Some(function) = self.pending_call {
            if self.strict {
                return Err(CalcError::malformed(
                    self.input,
                    format!("`{}` is missing its argument", function.name()),
                ));
            }
        }
        if self.expect_operand {
            if self.strict {
                return Err(CalcError::malformed(self.input, "missing operand"));
            }
            self.operands.push(Expr::Number(0.0));
        }

        while let Some(top) = self.operators.pop() {
            match top {
                StackEntry::Group | StackEntry::Call(_) if self.strict => {
                    return Err(CalcError::malformed(self.input, "unclosed `(`"));
                }
                StackEntry::Group => {}
                StackEntry::Call(function) => {
                    let argument = self.pop_operand()?;
                    self.operands.push(Expr::call(function, argument));
                }
                StackEntry::Binary(_) | StackEntry::Negate => self.apply(top)?,
            }
        }

        let expr = self.pop_operand()?;
        if !self.operands.is_empty() {
            return Err(CalcError::malformed(self.input, "dangling operands"));
        }
        Ok(expr)
    }

    fn accept_operand(&mut self, expr: Expr) -> CalcResult<Flow> {
        self.operands.push(expr);
        self.expect_operand = false;
        Ok(Flow::Continue)
    }

    fn apply(&mut self, entry: StackEntry) -> CalcResult<()> {
        match entry {
            StackEntry::Binary(op) => {
                let rhs = self.pop_operand()?;
                let lhs = self.pop_operand()?;
                self.operands.push(Expr::binary(op, lhs, rhs));
            }
            StackEntry::Negate => {
                let operand = self.pop_operand()?;
                self.operands.push(Expr::Negate(Box::new(operand)));
            }
            StackEntry::Group | StackEntry::Call(_) => {}
        }
        Ok(())
    }

    fn pop_operand(&mut self) -> CalcResult<Expr> {
        self.operands
            .pop()
            .ok_or_else(|| CalcError::malformed(self.input, "operand stack underflow"))
    }

    /// Strict mode fails, lenient mode ends the expression here.
    fn reject(&self, reason: impl Into<String>) -> CalcResult<Flow> {
        if self.strict {
            return Err(CalcError::malformed(self.input, reason));
        }
        Ok(Flow::Stop)
    }

    fn resolve(&self, name: &str) -> Option<Name<'a>> {
        if let Some(function) = MathFunction::from_name(name) {
            return Some(Name::Function(function));
        }
        match name {
            "pi" | "π" => return Some(Name::Constant(PI)),
            "e" => return Some(Name::Constant(E)),
            // Spellings the display uses for non-finite results.
            "inf" | "infinity" => return Some(Name::Constant(f64::INFINITY)),
            "nan" => return Some(Name::Constant(f64::NAN)),
            _ => {}
        }
        let variables: &'a [&'a str] = self.variables;
        variables
            .iter()
            .find(|variable| **variable == name)
            .map(|variable| Name::Variable(*variable))
    }
}
