use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;

/// Shunting-yard conversion. The operator stack only ever holds operators and open parentheses.
pub(super) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, EvaluationError> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        match token {
            Token::Literal(_) if token.is_numeric() => output.push(token),
            Token::OpenParenthesis => operators.push(token),
            Token::CloseParenthesis => parse_closing_parenthesis_token(&mut operators, &mut output)?,
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
            Token::Literal(text) => return Err(EvaluationError::invalid_text(&text)),
        }
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvaluationError::MismatchedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    loop {
        match operators.pop() {
            None => return Err(EvaluationError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    // Equal precedence pops too, which makes every operator left-associative.
    while let Some(Token::Operator(other_operator)) = operators.last() {
        if !other_operator.precedence_ge(&operator) {
            break;
        }
        output.extend(operators.pop());
    }

    operators.push(operator.token());
}
