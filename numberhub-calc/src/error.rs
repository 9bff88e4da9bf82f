//! Calculator errors

use numberhub_core::{HubError, NumberError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// Malformed expression: unknown symbol, unbalanced parentheses,
    /// missing operand or malformed number
    #[error("parse error: {0}")]
    ParseError(String),

    /// Well formed expression whose value is undefined
    #[error("math error: {0}")]
    MathError(String),
}

impl CalculatorError {
    pub fn parse(details: impl Into<String>) -> Self {
        CalculatorError::ParseError(details.into())
    }

    pub fn math(details: impl Into<String>) -> Self {
        CalculatorError::MathError(details.into())
    }
}

impl From<NumberError> for CalculatorError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => CalculatorError::ParseError(format!("malformed number '{}'", s)),
            other => CalculatorError::MathError(other.to_string()),
        }
    }
}

impl From<CalculatorError> for HubError {
    fn from(err: CalculatorError) -> Self {
        match err {
            CalculatorError::ParseError(s) => HubError::parse_error(s),
            CalculatorError::MathError(s) => HubError::math_error(s),
        }
    }
}
