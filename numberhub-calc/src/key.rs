//! Calculator keys
//!
//! A key is one press on the keypad. Function keys carry their opening
//! parenthesis, so `sin(` is a single key.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(u8),
    Dot,
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Modulo,
    Percent,
    Factorial,
    LeftParen,
    RightParen,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Pi,
    E,
}

/// Multi-character symbols, tried before single characters
const FUNCTION_SYMBOLS: [(&str, Key); 5] = [
    ("sin(", Key::Sin),
    ("cos(", Key::Cos),
    ("tan(", Key::Tan),
    ("log(", Key::Log),
    ("ln(", Key::Ln),
];

impl Key {
    /// Parse a key symbol; display aliases `×`, `÷` and `−` are accepted
    pub fn from_symbol(symbol: &str) -> Option<Key> {
        if let Some(&(_, key)) = FUNCTION_SYMBOLS.iter().find(|(s, _)| *s == symbol) {
            return Some(key);
        }
        let mut chars = symbol.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_char(c)
    }

    fn from_char(c: char) -> Option<Key> {
        let key = match c {
            '0'..='9' => Key::Digit(c as u8 - b'0'),
            '.' => Key::Dot,
            '+' => Key::Plus,
            '-' | '−' => Key::Minus,
            '*' | '×' => Key::Multiply,
            '/' | '÷' => Key::Divide,
            '^' => Key::Power,
            '#' => Key::Modulo,
            '%' => Key::Percent,
            '!' => Key::Factorial,
            '(' => Key::LeftParen,
            ')' => Key::RightParen,
            '√' => Key::Sqrt,
            'π' => Key::Pi,
            'e' => Key::E,
            _ => return None,
        };
        Some(key)
    }

    /// Split a typed expression into keys, skipping whitespace.
    /// Returns the offending text on an unknown symbol.
    pub fn parse_all(expression: &str) -> Result<Vec<Key>, String> {
        let mut keys = Vec::new();
        let mut rest = expression;
        while let Some(c) = rest.chars().next() {
            if c.is_whitespace() {
                rest = &rest[c.len_utf8()..];
                continue;
            }
            if let Some(&(symbol, key)) = FUNCTION_SYMBOLS.iter().find(|(s, _)| rest.starts_with(s)) {
                keys.push(key);
                rest = &rest[symbol.len()..];
                continue;
            }
            match Self::from_char(c) {
                Some(key) => keys.push(key),
                None => return Err(c.to_string()),
            }
            rest = &rest[c.len_utf8()..];
        }
        Ok(keys)
    }

    pub fn symbol(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Key::Digit(d) => DIGITS[d as usize % 10],
            Key::Dot => ".",
            Key::Plus => "+",
            Key::Minus => "-",
            Key::Multiply => "*",
            Key::Divide => "/",
            Key::Power => "^",
            Key::Modulo => "#",
            Key::Percent => "%",
            Key::Factorial => "!",
            Key::LeftParen => "(",
            Key::RightParen => ")",
            Key::Sqrt => "√",
            Key::Sin => "sin(",
            Key::Cos => "cos(",
            Key::Tan => "tan(",
            Key::Ln => "ln(",
            Key::Log => "log(",
            Key::Pi => "π",
            Key::E => "e",
        }
    }

    pub fn is_binary_operator(self) -> bool {
        matches!(self, Key::Plus | Key::Minus | Key::Multiply | Key::Divide | Key::Power | Key::Modulo)
    }

    /// Keys that open a parenthesised group
    pub fn opens_group(self) -> bool {
        matches!(self, Key::LeftParen | Key::Sin | Key::Cos | Key::Tan | Key::Ln | Key::Log)
    }

    /// Part of a number literal
    pub fn is_numeral(self) -> bool {
        matches!(self, Key::Digit(_) | Key::Dot)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        let keys = [
            Key::Digit(7), Key::Dot, Key::Plus, Key::Minus, Key::Multiply, Key::Divide,
            Key::Power, Key::Modulo, Key::Percent, Key::Factorial, Key::LeftParen,
            Key::RightParen, Key::Sqrt, Key::Sin, Key::Cos, Key::Tan, Key::Ln, Key::Log,
            Key::Pi, Key::E,
        ];
        for key in keys {
            assert_eq!(Key::from_symbol(key.symbol()), Some(key));
        }
    }

    #[test]
    fn test_display_aliases() {
        assert_eq!(Key::from_symbol("×"), Some(Key::Multiply));
        assert_eq!(Key::from_symbol("÷"), Some(Key::Divide));
        assert_eq!(Key::from_symbol("−"), Some(Key::Minus));
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(Key::from_symbol("x"), None);
        assert_eq!(Key::from_symbol("sin"), None);
        assert_eq!(Key::from_symbol("12"), None);
        assert_eq!(Key::from_symbol(""), None);
    }

    #[test]
    fn test_parse_all() {
        let keys = Key::parse_all("2 × sin(30)").unwrap();
        assert_eq!(keys, vec![
            Key::Digit(2), Key::Multiply, Key::Sin, Key::Digit(3), Key::Digit(0), Key::RightParen,
        ]);
        assert_eq!(Key::parse_all("ln(e)").unwrap(), vec![Key::Ln, Key::E, Key::RightParen]);
        assert_eq!(Key::parse_all("2$3"), Err("$".to_string()));
    }
}
