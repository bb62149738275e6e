mod infix_converter;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use log::trace;

/// Reorders the given infix tokens into postfix (Reverse Polish) order,
/// which can be evaluated without any knowledge of precedence or parentheses.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same numbers and operators in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// # use arithmetic_calculator::interpreter::error::EvaluationError;
/// # fn main() -> Result<(), EvaluationError> {
/// use arithmetic_calculator::interpreter::parser::parse;
/// use arithmetic_calculator::interpreter::lexer::tokenize;
/// use arithmetic_calculator::interpreter::tokens_to_string;
///
/// let postfix_tokens = parse(tokenize("(2 + 3) * 4"))?;
/// assert_eq!(tokens_to_string(&postfix_tokens), "2 3 + 4 *");
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>, EvaluationError> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    trace!("postfix order: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
