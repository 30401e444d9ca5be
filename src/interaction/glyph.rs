use serde::{Deserialize, Serialize};

use crate::core::functions::{E_LITERAL, MathFunction, PI_LITERAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }
}

/// One virtual keyboard button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    Digit(u8),
    Decimal,
    Operator(Operator),
    OpenParen,
    CloseParen,
    Function(MathFunction),
    Pi,
    Euler,
    Equals,
    Clear,
    Delete,
    Mode,
    Graph,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Glyph {
    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(digit) => DIGIT_LABELS[usize::from(digit.min(9))],
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Function(function) => function.name(),
            Self::Pi => "π",
            Self::Euler => "e",
            Self::Equals => "=",
            Self::Clear => "C",
            Self::Delete => "DEL",
            Self::Mode => "MODE",
            Self::Graph => "GRAPH",
        }
    }

    /// Text appended to the input buffer, `None` for control glyphs.
    ///
    /// Function glyphs open a call and leave the closing parenthesis to the
    /// user.
    #[must_use]
    pub fn input_text(self) -> Option<&'static str> {
        match self {
            Self::Digit(_) | Self::Decimal | Self::Operator(_) | Self::OpenParen | Self::CloseParen => {
                Some(self.label())
            }
            Self::Function(function) => Some(match function {
                MathFunction::Sin => "sin(",
                MathFunction::Cos => "cos(",
                MathFunction::Tan => "tan(",
                MathFunction::Sqrt => "sqrt(",
                MathFunction::Log => "log(",
                MathFunction::Ln => "ln(",
            }),
            Self::Pi => Some(PI_LITERAL),
            Self::Euler => Some(E_LITERAL),
            Self::Equals | Self::Clear | Self::Delete | Self::Mode | Self::Graph => None,
        }
    }

    #[must_use]
    pub fn is_control(self) -> bool {
        self.input_text().is_none()
    }
}

/// Keypad catalog in row-major order, 6 columns by 5 rows.
pub const KEYPAD_GLYPHS: [Glyph; 30] = [
    Glyph::Digit(7),
    Glyph::Digit(8),
    Glyph::Digit(9),
    Glyph::Operator(Operator::Divide),
    Glyph::Function(MathFunction::Sin),
    Glyph::Function(MathFunction::Cos),
    Glyph::Digit(4),
    Glyph::Digit(5),
    Glyph::Digit(6),
    Glyph::Operator(Operator::Multiply),
    Glyph::Function(MathFunction::Tan),
    Glyph::Function(MathFunction::Log),
    Glyph::Digit(1),
    Glyph::Digit(2),
    Glyph::Digit(3),
    Glyph::Operator(Operator::Subtract),
    Glyph::Function(MathFunction::Sqrt),
    Glyph::Operator(Operator::Power),
    Glyph::Digit(0),
    Glyph::Decimal,
    Glyph::Equals,
    Glyph::Operator(Operator::Add),
    Glyph::OpenParen,
    Glyph::CloseParen,
    Glyph::Clear,
    Glyph::Delete,
    Glyph::Mode,
    Glyph::Graph,
    Glyph::Pi,
    Glyph::Euler,
];

#[cfg(test)]
mod tests {
    use super::{Glyph, KEYPAD_GLYPHS};

    #[test]
    fn catalog_labels_match_keypad_order() {
        let labels: Vec<&str> = KEYPAD_GLYPHS.iter().map(|glyph| glyph.label()).collect();
        assert_eq!(
            labels,
            vec![
                "7", "8", "9", "/", "sin", "cos", "4", "5", "6", "*", "tan", "log", "1", "2", "3",
                "-", "sqrt", "^", "0", ".", "=", "+", "(", ")", "C", "DEL", "MODE", "GRAPH", "π",
                "e",
            ]
        );
    }

    #[test]
    fn control_glyphs_have_no_input_text() {
        let controls: Vec<Glyph> = KEYPAD_GLYPHS
            .into_iter()
            .filter(|glyph| glyph.is_control())
            .collect();
        assert_eq!(
            controls,
            vec![
                Glyph::Equals,
                Glyph::Clear,
                Glyph::Delete,
                Glyph::Mode,
                Glyph::Graph
            ]
        );
    }
}
