use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A binary mathematical operator. All of them are left-associative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        Token::Operator(*self)
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies the operator as `a <op> b`, where `a` is the left-hand operand.
    ///
    /// # Arguments
    ///
    /// * `a`: The left-hand operand.
    /// * `b`: The right-hand operand.
    ///
    /// returns: The result, or [`EvaluationError::DivisionByZero`] if dividing by exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use arithmetic_calculator::interpreter::operator::BinaryOperator;
    /// # use arithmetic_calculator::interpreter::error::EvaluationError;
    ///
    /// # fn main() -> Result<(), EvaluationError> {
    /// let difference = BinaryOperator::Subtract.evaluate(5.0, 3.0)?;
    /// assert_eq!(difference, 2.0);
    /// # Ok(()) }
    /// ```
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, EvaluationError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide if b == 0.0 => Err(EvaluationError::DivisionByZero),
            BinaryOperator::Divide => Ok(a / b),
        }
    }
}

impl str::FromStr for BinaryOperator {
    type Err = EvaluationError;

    fn from_str(input: &str) -> Result<BinaryOperator, Self::Err> {
        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (Some(symbol), None) => {
                BinaryOperator::from_symbol(symbol).ok_or_else(|| EvaluationError::invalid_text(input))
            }
            _ => Err(EvaluationError::invalid_text(input)),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert_eq!(equal1.precedence(), equal2.precedence())
    }

    #[test]
    fn additive_operators_share_precedence() {
        assert_eq!(
            BinaryOperator::Add.precedence(),
            BinaryOperator::Subtract.precedence()
        )
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = BinaryOperator::Multiply;
        let lesser = BinaryOperator::Add;
        assert!(greater.precedence() > lesser.precedence())
    }

    #[test]
    fn operator_ge_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert!(equal1.precedence_ge(&equal2))
    }

    #[test]
    fn lesser_operator_is_not_ge_greater_operator() {
        let greater = BinaryOperator::Divide;
        let lesser = BinaryOperator::Subtract;
        assert!(!lesser.precedence_ge(&greater))
    }

    #[parameterized(
    operator = {
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    },
    expected = {
    8.0,
    4.0,
    12.0,
    3.0,
    }
    )]
    fn evaluate_applies_left_operand_first(operator: BinaryOperator, expected: f64) {
        assert_eq!(operator.evaluate(6.0, 2.0), Ok(expected));
    }

    #[test]
    fn division_by_zero_returns_err() {
        assert_eq!(
            BinaryOperator::Divide.evaluate(1.0, 0.0),
            Err(EvaluationError::DivisionByZero)
        );
    }

    #[test]
    fn division_by_negative_zero_returns_err() {
        assert_eq!(
            BinaryOperator::Divide.evaluate(1.0, -0.0),
            Err(EvaluationError::DivisionByZero)
        );
    }

    #[test]
    fn overflow_propagates_as_infinity() {
        let product = BinaryOperator::Multiply.evaluate(f64::MAX, 10.0).unwrap();
        assert!(product.is_infinite());
    }

    #[test]
    fn symbols_parse_into_operators() {
        assert_eq!("*".parse::<BinaryOperator>(), Ok(BinaryOperator::Multiply));
        assert!("**".parse::<BinaryOperator>().is_err());
        assert!("^".parse::<BinaryOperator>().is_err());
    }
}
