use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;

/// Reduces postfix tokens to a single value using a value stack.
///
/// # Arguments
///
/// * `postfix_tokens`: Numbers and operators in postfix (Reverse Polish) order.
///
/// returns: The value of the expression. Fails if an operator lacks operands, if anything other
/// than exactly one value remains, on tokens that are neither numbers nor operators, or when
/// dividing by zero.
///
/// # Examples
///
/// ```
/// # use arithmetic_calculator::interpreter::error::EvaluationError;
/// # fn main() -> Result<(), EvaluationError> {
/// use arithmetic_calculator::interpreter::evaluator::evaluate;
/// use arithmetic_calculator::interpreter::token::Token;
///
/// let postfix_tokens: Vec<Token> = ["7", "2", "-"]
///     .iter()
///     .map(|text| text.parse().unwrap())
///     .collect();
/// assert_eq!(evaluate(&postfix_tokens)?, 5.0);
/// # Ok(()) }
/// ```
pub fn evaluate(postfix_tokens: &[Token]) -> Result<f64, EvaluationError> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Operator(operator) => {
                let (a, b) = pop_operands(&mut values)?;
                values.push(operator.evaluate(a, b)?);
            }
            token => match token.numeric_value() {
                Some(value) => values.push(value),
                None => return Err(EvaluationError::invalid_token(token)),
            },
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvaluationError::invalid_input()),
    }
}

/// Pops `b` (the most recent value) and then `a`, returned in their original order `(a, b)`.
fn pop_operands(values: &mut Vec<f64>) -> Result<(f64, f64), EvaluationError> {
    match (values.pop(), values.pop()) {
        (Some(b), Some(a)) => Ok((a, b)),
        _ => Err(EvaluationError::invalid_input()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn tokens(texts: &[&str]) -> Vec<Token> {
        texts.iter().map(|text| text.parse().unwrap()).collect()
    }

    #[parameterized(
    postfix = {
    &["42"],
    &["2", "3", "4", "*", "+"],
    &["2", "3", "+", "4", "*"],
    &["10", "4", "-"],
    &["1", "4", "/"],
    &["2", "3", "+", "1", "-"],
    &["1.5e2", "2", "/"],
    },
    expected = {
    42.0,
    14.0,
    20.0,
    6.0,
    0.25,
    4.0,
    75.0,
    }
    )]
    fn evaluate_postfix_returns_correct_value(postfix: &[&str], expected: f64) {
        assert_eq!(evaluate(&tokens(postfix)), Ok(expected));
    }

    #[test]
    fn operands_are_applied_in_original_order() {
        assert_eq!(evaluate(&tokens(&["3", "12", "/"])), Ok(0.25));
        assert_eq!(evaluate(&tokens(&["3", "12", "-"])), Ok(-9.0));
    }

    #[test]
    fn operator_without_enough_operands_returns_err() {
        assert_eq!(
            evaluate(&tokens(&["2", "+"])),
            Err(EvaluationError::invalid_input())
        );
    }

    #[test]
    fn empty_postfix_returns_err() {
        assert_eq!(evaluate(&[]), Err(EvaluationError::invalid_input()));
    }

    #[test]
    fn leftover_values_return_err() {
        assert_eq!(
            evaluate(&tokens(&["1", "2"])),
            Err(EvaluationError::invalid_input())
        );
    }

    #[test]
    fn division_by_zero_returns_err() {
        assert_eq!(
            evaluate(&tokens(&["10", "5", "5", "-", "/"])),
            Err(EvaluationError::DivisionByZero)
        );
    }

    #[test]
    fn parenthesis_in_postfix_returns_err() {
        assert_eq!(
            evaluate(&tokens(&["1", "("])),
            Err(EvaluationError::invalid_text("("))
        );
    }

    #[test]
    fn malformed_literal_returns_err() {
        assert_eq!(
            evaluate(&tokens(&["1.2.3"])),
            Err(EvaluationError::invalid_text("1.2.3"))
        );
    }
}
