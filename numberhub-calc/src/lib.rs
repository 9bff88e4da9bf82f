//! NumberHub Calc - Calculator expression engine
//!
//! Keys are typed into an `ExpressionBuffer`, which keeps the expression
//! well formed while typing. `evaluate` lexes, parses and evaluates the
//! buffer in arbitrary precision decimals.
//!
//! Operators:
//! - `+ - * /`, `^` (power), `#` (modulo), `%` (percent), `!` (factorial)
//! - `√`, `sin( cos( tan(` (angle mode aware), `ln( log(`
//! - Constants `π` and `e`

mod ast;
mod buffer;
mod error;
mod eval;
mod key;
mod lexer;
mod parser;

pub use ast::{BinOp, Constant, Expr, Function, PostfixOp, UnaryOp};
pub use buffer::ExpressionBuffer;
pub use error::CalculatorError;
pub use eval::Evaluator;
pub use key::Key;

use numberhub_core::{Number, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Unit of trigonometric arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    Deg,
    #[default]
    Rad,
}

impl AngleMode {
    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Deg => AngleMode::Rad,
            AngleMode::Rad => AngleMode::Deg,
        }
    }
}

/// Parse an expression into a tree without evaluating it
pub fn parse_keys(keys: &[Key]) -> Result<Expr, CalculatorError> {
    let tokens = lexer::tokenize(keys)?;
    parser::parse(&tokens)
}

/// Calculator state: the typed expression and the angle mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    buffer: ExpressionBuffer,
    angle_mode: AngleMode,
    precision: u32,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            buffer: ExpressionBuffer::new(),
            angle_mode: AngleMode::default(),
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Digits used for transcendental functions
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_expression(mut self, expression: &str) -> Result<Self, CalculatorError> {
        self.buffer = ExpressionBuffer::from_expression(expression)?;
        Ok(self)
    }

    pub fn add_symbol(&mut self, symbol: &str) -> Result<(), CalculatorError> {
        self.buffer.add_symbol(symbol)
    }

    pub fn delete_symbol(&mut self) -> Option<Key> {
        self.buffer.delete_symbol()
    }

    pub fn clear_symbols(&mut self) {
        self.buffer.clear_symbols();
    }

    /// Switch between degrees and radians, returning the new mode
    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        self.angle_mode = self.angle_mode.toggled();
        self.angle_mode
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn buffer(&self) -> &ExpressionBuffer {
        &self.buffer
    }

    pub fn expression(&self) -> String {
        self.buffer.expression()
    }

    /// Evaluate the current buffer. Reads only the buffer and angle mode, so
    /// repeated calls on an unchanged calculator give the same result.
    pub fn evaluate(&self) -> Result<Number, CalculatorError> {
        let expr = parse_keys(self.buffer.keys())?;
        let result = Evaluator::new(self.angle_mode, self.precision).eval(&expr);
        match &result {
            Ok(value) => debug!(expression = %self.expression(), result = %value, "evaluated"),
            Err(e) => debug!(expression = %self.expression(), error = %e, "evaluation failed"),
        }
        result
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
