pub mod error;
pub mod evaluator;
pub mod formatter;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;

/// Evaluates the given arithmetic expression.
///
/// The expression may contain numbers, the operators `+ - * /` and parentheses.
/// Multiplication and division bind tighter than addition and subtraction, and operators of
/// equal precedence are applied from left to right. There is no unary minus.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use arithmetic_calculator::interpreter::calculate;
/// # use arithmetic_calculator::interpreter::error::EvaluationError;
///
/// # fn main() -> Result<(), EvaluationError> {
/// let value = calculate("2 + 3 * 4")?;
/// assert_eq!(value, 14.0);
/// # Ok(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64, EvaluationError> {
    let infix_tokens = lexer::tokenize(expression);
    let postfix_tokens = parser::parse(infix_tokens)?;
    let value = evaluator::evaluate(&postfix_tokens)?;
    debug!("{} = {}", tokens_to_string(&postfix_tokens), value);
    Ok(value)
}

/// Joins the given tokens with single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use arithmetic_calculator::interpreter::tokens_to_string;
/// use arithmetic_calculator::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::Literal("2".to_string()),
///     Token::Literal("3".to_string()),
///     "+".parse().unwrap(),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "2 3 +");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = {
    "2+3*4",
    "(2+3)*4",
    "2+3-1",
    "8/4/2",
    "2*3/4",
    "10 - 2 * 3 + 1",
    "((1))",
    "1.5 * (2 + 0.5)",
    "7",
    "1e3/4",
    },
    expected = {
    14.0,
    20.0,
    4.0,
    1.0,
    1.5,
    5.0,
    1.0,
    3.75,
    7.0,
    250.0,
    }
    )]
    fn calculate_expression_returns_correct_value(expression: &str, expected: f64) {
        assert_eq!(calculate(expression), Ok(expected));
    }

    #[parameterized(
    expression = {
    "10/(5-5)",
    "1/0",
    "0/0",
    },
    )]
    fn division_by_zero_is_reported(expression: &str) {
        assert_eq!(calculate(expression), Err(EvaluationError::DivisionByZero));
    }

    #[parameterized(
    expression = {
    "(1+2",
    "1+2)",
    ")(",
    "((2)",
    },
    )]
    fn unbalanced_parentheses_are_reported(expression: &str) {
        assert_eq!(
            calculate(expression),
            Err(EvaluationError::MismatchedParentheses)
        );
    }

    #[parameterized(
    expression = {
    "2+",
    "",
    "()",
    "-5+2",
    "3*-2",
    "1.2.3",
    "2 x 3",
    "1e-5",
    "2^3",
    "1e400",
    "1e400*0",
    "0x1p4",
    },
    )]
    fn invalid_input_is_reported(expression: &str) {
        let error = calculate(expression).expect_err("Should return Err");
        assert_eq!(error.kind(), error::ErrorKind::InvalidInput);
    }

    #[test]
    fn conversion_errors_short_circuit_evaluation() {
        // The malformed literal is found before the division by zero could be.
        assert_eq!(
            calculate("1.2.3 + 1/0"),
            Err(EvaluationError::invalid_text("1.2.3"))
        );
    }

    #[test]
    fn overflow_propagates_as_infinity() {
        let value = calculate("1e308 * 10").unwrap();
        assert!(value.is_infinite() && value.is_sign_positive());
    }

    #[test]
    fn spelled_out_infinity_is_a_number() {
        assert_eq!(calculate("inf - 1"), Ok(f64::INFINITY));
        assert!(calculate("nan * 2").unwrap().is_nan());
    }

    #[test]
    fn calculating_twice_yields_same_result() {
        let expression = "1 / 3 + 2 * (4 - 1.25)";
        assert_eq!(calculate(expression), calculate(expression));
    }
}
