use crate::interpreter::operator::BinaryOperator;
use std::convert::Infallible;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    /// Text found between delimiters. Whether it is actually a number is decided later.
    Literal(String),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    /// The token for one of the characters that always stand on their own: `+ - * / ( )`.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::OpenParenthesis),
            ')' => Some(Token::CloseParenthesis),
            symbol => BinaryOperator::from_symbol(symbol).map(|operator| operator.token()),
        }
    }

    /// Whether the token is a literal that parses as a floating-point number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Token::Literal(text) if is_numeric(text))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Token::Literal(text) => parse_number(text),
            _ => None,
        }
    }
}

/// Whether the text parses as a floating-point literal, e.g. `3`, `.5`, `2.5e3` or `-1`.
pub fn is_numeric(text: &str) -> bool {
    parse_number(text).is_some()
}

/// Parses a floating-point literal. Literals too large for an `f64` are rejected rather than
/// rounded to infinity. Infinity and NaN are only produced when spelled out.
fn parse_number(text: &str) -> Option<f64> {
    let value = text.parse::<f64>().ok()?;
    if value.is_finite() || names_non_finite_value(text) {
        Some(value)
    } else {
        None
    }
}

fn names_non_finite_value(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|name| unsigned.eq_ignore_ascii_case(name))
}

/// Whether the text is exactly one of `+`, `-`, `*` or `/`.
pub fn is_operator(text: &str) -> bool {
    text.parse::<BinaryOperator>().is_ok()
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        let token = match (characters.next(), characters.next()) {
            (Some(symbol), None) => Token::from_symbol(symbol),
            _ => None,
        };
        Ok(token.unwrap_or_else(|| Token::Literal(input.to_string())))
    }
}
