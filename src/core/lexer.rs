use logos::{Lexer, Logos};
use serde::{Deserialize, Serialize};

#[derive(Logos, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // The exponent is taken by the callback, see `number`.
    #[regex(r"[0-9]+\.?[0-9]*", number)]
    #[regex(r"\.[0-9]+", number)]
    Number(f64),
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_ascii_lowercase())]
    #[token("π", |lex| lex.slice().to_owned())]
    Name(String),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("!")]
    Bang,
}

/// Tokenizer output.
///
/// Lexing never fails: it stops at the first character it cannot classify
/// and reports that byte offset in `stopped_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub stopped_at: Option<usize>,
}

#[must_use]
pub fn tokenize(text: &str) -> Lexed {
    let mut lexer = Token::lexer(text);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Lexed {
                    tokens,
                    stopped_at: Some(lexer.span().start),
                };
            }
        }
    }
    Lexed {
        tokens,
        stopped_at: None,
    }
}

/// Extends a mantissa match with `e [+-] digits` when digits follow, so
/// `2e` lexes as the number `2` followed by the name `e`.
fn number(lex: &mut Lexer<Token>) -> Option<f64> {
    lex.bump(exponent_len(lex.remainder()));
    lex.slice().parse().ok()
}

fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 { 0 } else { 1 + sign + digits }
}

#[cfg(test)]
mod tests {
    use super::{Token, tokenize};

    #[test]
    fn lexes_functions_numbers_and_operators() {
        let lexed = tokenize("sin(30) + 2.5e1*π");
        assert_eq!(lexed.stopped_at, None);
        assert_eq!(
            lexed.tokens,
            vec![
                Token::Name("sin".to_owned()),
                Token::LParen,
                Token::Number(30.0),
                Token::RParen,
                Token::Plus,
                Token::Number(25.0),
                Token::Star,
                Token::Name("π".to_owned()),
            ]
        );
    }

    #[test]
    fn dangling_exponent_marker_is_a_name() {
        let lexed = tokenize("2e");
        assert_eq!(
            lexed.tokens,
            vec![Token::Number(2.0), Token::Name("e".to_owned())]
        );
    }

    #[test]
    fn stops_at_unknown_character() {
        let lexed = tokenize("2+3#4");
        assert_eq!(lexed.stopped_at, Some(3));
        assert_eq!(lexed.tokens.len(), 3);
    }

    #[test]
    fn exponent_needs_digits() {
        let lexed = tokenize("1E+3 4e+");
        assert_eq!(
            lexed.tokens,
            vec![
                Token::Number(1000.0),
                Token::Number(4.0),
                Token::Name("e".to_owned()),
                Token::Plus,
            ]
        );
    }

    #[test]
    fn lone_dot_stops_lexing() {
        let lexed = tokenize("1+.");
        assert_eq!(lexed.stopped_at, Some(2));
    }
}
