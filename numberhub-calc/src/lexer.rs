//! Key sequence to tokens
//!
//! Digits and dots merge into number literals. A `*` is inserted between two
//! adjacent operands, so `2π`, `3(4)` and `(1)(2)` multiply.

use numberhub_core::Number;
use crate::ast::{Constant, Function};
use crate::{CalculatorError, Key};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Number),
    Constant(Constant),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Hash,
    Percent,
    Bang,
    LParen,
    RParen,
    Sqrt,
    /// Function name; the lexer always follows it with `LParen`
    Func(Function),
}

impl Token {
    /// Token can end an operand
    fn ends_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Constant(_) | Token::RParen | Token::Percent | Token::Bang)
    }

    /// Token can start an operand
    fn starts_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Constant(_) | Token::LParen | Token::Func(_) | Token::Sqrt)
    }
}

pub fn tokenize(keys: &[Key]) -> Result<Vec<Token>, CalculatorError> {
    let mut tokens: Vec<Token> = Vec::with_capacity(keys.len());
    let mut literal = String::new();

    let mut iter = keys.iter().copied().peekable();
    while let Some(key) = iter.next() {
        let produced: Vec<Token> = match key {
            Key::Digit(_) | Key::Dot => {
                literal.clear();
                literal.push_str(key.symbol());
                while let Some(next) = iter.next_if(|k| k.is_numeral()) {
                    literal.push_str(next.symbol());
                }
                let number = Number::from_str(&literal)
                    .map_err(|_| CalculatorError::parse(format!("malformed number '{}'", literal)))?;
                vec![Token::Number(number)]
            }
            Key::Plus => vec![Token::Plus],
            Key::Minus => vec![Token::Minus],
            Key::Multiply => vec![Token::Star],
            Key::Divide => vec![Token::Slash],
            Key::Power => vec![Token::Caret],
            Key::Modulo => vec![Token::Hash],
            Key::Percent => vec![Token::Percent],
            Key::Factorial => vec![Token::Bang],
            Key::LeftParen => vec![Token::LParen],
            Key::RightParen => vec![Token::RParen],
            Key::Sqrt => vec![Token::Sqrt],
            Key::Pi => vec![Token::Constant(Constant::Pi)],
            Key::E => vec![Token::Constant(Constant::E)],
            Key::Sin => vec![Token::Func(Function::Sin), Token::LParen],
            Key::Cos => vec![Token::Func(Function::Cos), Token::LParen],
            Key::Tan => vec![Token::Func(Function::Tan), Token::LParen],
            Key::Ln => vec![Token::Func(Function::Ln), Token::LParen],
            Key::Log => vec![Token::Func(Function::Log), Token::LParen],
        };

        for token in produced {
            // Implicit multiplication
            if token.starts_operand() && tokens.last().is_some_and(|t| t.ends_operand()) {
                tokens.push(Token::Star);
            }
            tokens.push(token);
        }
    }

    Ok(tokens)
}
