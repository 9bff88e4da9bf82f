//! Expression buffer
//!
//! Holds the keys typed so far and applies the input policy:
//! - a binary operator typed after a binary operator replaces it, except a
//!   `-` after `*`, `/` or `^`, which is kept as a unary minus
//! - a binary operator other than `-` at the start of the buffer or right
//!   after an opening parenthesis is ignored
//! - a second `.` in the same number is ignored

use crate::{CalculatorError, Key};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    keys: Vec<Key>,
}

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer by typing every symbol of `expression` in order
    pub fn from_expression(expression: &str) -> Result<Self, CalculatorError> {
        let keys = Key::parse_all(expression)
            .map_err(|s| CalculatorError::parse(format!("unknown symbol '{}'", s)))?;
        let mut buffer = Self::new();
        for key in keys {
            buffer.push_key(key);
        }
        Ok(buffer)
    }

    /// Type one symbol
    pub fn add_symbol(&mut self, symbol: &str) -> Result<(), CalculatorError> {
        let key = Key::from_symbol(symbol)
            .ok_or_else(|| CalculatorError::parse(format!("unknown symbol '{}'", symbol)))?;
        self.push_key(key);
        Ok(())
    }

    /// Remove the last key; no-op on an empty buffer
    pub fn delete_symbol(&mut self) -> Option<Key> {
        self.keys.pop()
    }

    pub fn clear_symbols(&mut self) {
        self.keys.clear();
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Expression text, e.g. `2+sin(30)`
    pub fn expression(&self) -> String {
        self.keys.iter().map(|k| k.symbol()).collect()
    }

    pub fn push_key(&mut self, key: Key) {
        match key {
            Key::Dot if self.current_number_has_dot() => {}
            k if k.is_binary_operator() => self.push_operator(k),
            k => self.keys.push(k),
        }
    }

    fn push_operator(&mut self, op: Key) {
        if let Some(&last) = self.keys.last() {
            if op == Key::Minus && matches!(last, Key::Multiply | Key::Divide | Key::Power) {
                self.keys.push(op);
                return;
            }
            if last.is_binary_operator() {
                while self.keys.last().is_some_and(|k| k.is_binary_operator()) {
                    self.keys.pop();
                }
            }
        }

        let at_start = self.keys.last().map_or(true, |k| k.opens_group());
        if at_start && op != Key::Minus {
            return;
        }
        self.keys.push(op);
    }

    fn current_number_has_dot(&self) -> bool {
        self.keys
            .iter()
            .rev()
            .take_while(|k| k.is_numeral())
            .any(|&k| k == Key::Dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(symbols: &[&str]) -> String {
        let mut buffer = ExpressionBuffer::new();
        for s in symbols {
            buffer.add_symbol(s).unwrap();
        }
        buffer.expression()
    }

    #[test]
    fn test_operator_replaces_operator() {
        assert_eq!(typed(&["2", "+", "*", "3"]), "2*3");
        assert_eq!(typed(&["2", "-", "+"]), "2+");
    }

    #[test]
    fn test_unary_minus_kept() {
        assert_eq!(typed(&["2", "*", "-", "3"]), "2*-3");
        assert_eq!(typed(&["2", "^", "-", "1"]), "2^-1");
        assert_eq!(typed(&["-", "4"]), "-4");
        assert_eq!(typed(&["(", "-", "4", ")"]), "(-4)");
        // A following operator replaces the whole operator run
        assert_eq!(typed(&["2", "*", "-", "+"]), "2+");
    }

    #[test]
    fn test_leading_operator_ignored() {
        assert_eq!(typed(&["*", "2"]), "2");
        assert_eq!(typed(&["sin(", "/", "3", ")"]), "sin(3)");
        assert_eq!(typed(&["-", "+"]), "");
    }

    #[test]
    fn test_second_dot_ignored() {
        assert_eq!(typed(&["1", ".", "2", ".", "3"]), "1.23");
        assert_eq!(typed(&["1", ".", "2", "+", ".", "5"]), "1.2+.5");
    }

    #[test]
    fn test_unknown_symbol() {
        let mut buffer = ExpressionBuffer::new();
        assert!(matches!(buffer.add_symbol("x"), Err(CalculatorError::ParseError(_))));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_delete_and_clear() {
        let mut buffer = ExpressionBuffer::from_expression("12+sin(3").unwrap();
        assert_eq!(buffer.delete_symbol(), Some(Key::Digit(3)));
        assert_eq!(buffer.delete_symbol(), Some(Key::Sin));
        assert_eq!(buffer.expression(), "12+");
        buffer.clear_symbols();
        assert!(buffer.is_empty());
        assert_eq!(buffer.delete_symbol(), None);
    }
}
