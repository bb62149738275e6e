use crate::interpreter::token::Token;
use thiserror::Error;

/// The category of an [`EvaluationError`], for callers that need to switch on the failure
/// without inspecting its message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MismatchedParentheses,
    InvalidInput,
    DivisionByZero,
}

/// Why an expression could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    /// An unrecognized token, too few operands or a malformed result stack.
    #[error("invalid input{}", describe_token(.token))]
    InvalidInput { token: Option<String> },
    #[error("division by zero")]
    DivisionByZero,
}

impl EvaluationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvaluationError::MismatchedParentheses => ErrorKind::MismatchedParentheses,
            EvaluationError::InvalidInput { .. } => ErrorKind::InvalidInput,
            EvaluationError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }

    pub(crate) fn invalid_input() -> EvaluationError {
        EvaluationError::InvalidInput { token: None }
    }

    pub(crate) fn invalid_token(token: &Token) -> EvaluationError {
        Self::invalid_text(&token.to_string())
    }

    pub(crate) fn invalid_text(text: &str) -> EvaluationError {
        EvaluationError::InvalidInput {
            token: Some(text.to_string()),
        }
    }
}

fn describe_token(token: &Option<String>) -> String {
    match token {
        Some(text) => format!(": {}", text),
        None => String::new(),
    }
}
