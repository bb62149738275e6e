use crate::interpreter::token::Token;
use log::trace;
use std::mem;

/// Splits an expression into tokens.
///
/// Spaces are skipped and each of `+ - * / ( )` becomes a token of its own. Everything else
/// accumulates into literals, which are not validated here. Never fails, an empty expression
/// simply has no tokens.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use arithmetic_calculator::interpreter::lexer::tokenize;
/// use arithmetic_calculator::interpreter::tokens_to_string;
///
/// let tokens = tokenize("(12+3.5) *2");
/// assert_eq!(tokens_to_string(&tokens), "( 12 + 3.5 ) * 2");
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();

    for character in expression.chars() {
        if character == ' ' {
            continue;
        }
        match Token::from_symbol(character) {
            Some(symbol) => {
                flush_literal(&mut literal, &mut tokens);
                tokens.push(symbol);
            }
            None => literal.push(character),
        }
    }
    flush_literal(&mut literal, &mut tokens);

    trace!("tokenized {:?} into {:?}", expression, tokens);
    tokens
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(mem::take(literal)));
    }
}
