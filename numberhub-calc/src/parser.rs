//! Expression parser (recursive descent)
//!
//! Precedence, lowest first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '#') unary)*
//! unary   := ('-' | '√') unary | power
//! power   := postfix ('^' unary)?          right associative
//! postfix := primary ('!' | '%')*
//! primary := number | constant | '(' expr ')' | func '(' expr ')'
//! ```

use crate::ast::{BinOp, Expr, PostfixOp, UnaryOp};
use crate::lexer::Token;
use crate::CalculatorError;

/// Deepest nesting of groups, prefix operators and powers
const MAX_DEPTH: usize = 128;

/// Longest token stream; chains of binary operators build trees this deep
const MAX_TOKENS: usize = 1_000;

/// Parse a full token stream; trailing tokens are an error
pub fn parse(tokens: &[Token]) -> Result<Expr, CalculatorError> {
    if tokens.is_empty() {
        return Err(CalculatorError::parse("empty expression"));
    }
    if tokens.len() > MAX_TOKENS {
        return Err(CalculatorError::parse("expression too long"));
    }

    let mut parser = Parser { tokens, pos: 0, depth: 0 };
    let expr = parser.parse_expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(Token::RParen) => Err(CalculatorError::parse("unbalanced parentheses: unexpected ')'")),
        Some(token) => Err(CalculatorError::parse(format!("unexpected token {:?}", token))),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, CalculatorError> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => return Ok(left),
            };
            self.pos += 1;
            let right = self.parse_term()?;
            left = Expr::binary(left, op, right);
        }
    }

    fn parse_term(&mut self) -> Result<Expr, CalculatorError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                Some(Token::Hash) => BinOp::Mod,
                _ => return Ok(left),
            };
            self.pos += 1;
            let right = self.parse_unary()?;
            left = Expr::binary(left, op, right);
        }
    }

    /// Every recursive path passes through here, so this is where nesting
    /// is counted
    fn parse_unary(&mut self) -> Result<Expr, CalculatorError> {
        if self.depth == MAX_DEPTH {
            return Err(CalculatorError::parse("expression nested too deeply"));
        }
        self.depth += 1;
        let result = self.parse_prefix();
        self.depth -= 1;
        result
    }

    fn parse_prefix(&mut self) -> Result<Expr, CalculatorError> {
        if self.eat(&Token::Minus) {
            return Ok(Expr::unary(UnaryOp::Neg, self.parse_unary()?));
        }
        if self.eat(&Token::Sqrt) {
            return Ok(Expr::unary(UnaryOp::Sqrt, self.parse_unary()?));
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Expr, CalculatorError> {
        let base = self.parse_postfix()?;
        if self.eat(&Token::Caret) {
            // Exponent may carry its own sign: 2^-3
            let exponent = self.parse_unary()?;
            return Ok(Expr::binary(base, BinOp::Pow, exponent));
        }
        Ok(base)
    }

    fn parse_postfix(&mut self) -> Result<Expr, CalculatorError> {
        let mut expr = self.parse_primary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Bang) => PostfixOp::Factorial,
                Some(Token::Percent) => PostfixOp::Percent,
                _ => return Ok(expr),
            };
            self.pos += 1;
            expr = Expr::Postfix(Box::new(expr), op);
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, CalculatorError> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::Number(n.clone())),
            Some(Token::Constant(c)) => Ok(Expr::Constant(*c)),
            Some(Token::LParen) => {
                let inner = self.parse_group()?;
                Ok(inner)
            }
            Some(Token::Func(f)) => {
                if !self.eat(&Token::LParen) {
                    return Err(CalculatorError::parse("function without argument"));
                }
                let arg = self.parse_group()?;
                Ok(Expr::Function(*f, Box::new(arg)))
            }
            Some(Token::RParen) => Err(CalculatorError::parse("unbalanced parentheses: unexpected ')'")),
            Some(token) => Err(CalculatorError::parse(format!("missing operand before {:?}", token))),
            None => Err(CalculatorError::parse("missing operand at end of expression")),
        }
    }

    /// Contents of a group whose `(` was already consumed
    fn parse_group(&mut self) -> Result<Expr, CalculatorError> {
        if self.peek() == Some(&Token::RParen) {
            return Err(CalculatorError::parse("empty parentheses"));
        }
        let inner = self.parse_expr()?;
        if !self.eat(&Token::RParen) {
            return Err(CalculatorError::parse("unbalanced parentheses: missing ')'"));
        }
        Ok(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Constant, Function};
    use crate::lexer::tokenize;
    use crate::Key;
    use numberhub_core::Number;

    fn parse_str(expression: &str) -> Result<Expr, CalculatorError> {
        parse(&tokenize(&Key::parse_all(expression).unwrap())?)
    }

    fn n(v: i64) -> Expr {
        Expr::Number(Number::from_i64(v))
    }

    #[test]
    fn test_precedence() {
        // 1 + 2 * 3
        assert_eq!(
            parse_str("1+2*3").unwrap(),
            Expr::binary(n(1), BinOp::Add, Expr::binary(n(2), BinOp::Mul, n(3)))
        );
        // Left associative subtraction
        assert_eq!(
            parse_str("8-3-2").unwrap(),
            Expr::binary(Expr::binary(n(8), BinOp::Sub, n(3)), BinOp::Sub, n(2))
        );
    }

    #[test]
    fn test_power_right_associative() {
        assert_eq!(
            parse_str("2^3^2").unwrap(),
            Expr::binary(n(2), BinOp::Pow, Expr::binary(n(3), BinOp::Pow, n(2)))
        );
    }

    #[test]
    fn test_unary_minus_below_power() {
        // -2^2 = -(2^2)
        assert_eq!(
            parse_str("-2^2").unwrap(),
            Expr::unary(UnaryOp::Neg, Expr::binary(n(2), BinOp::Pow, n(2)))
        );
        assert_eq!(
            parse_str("2^-1").unwrap(),
            Expr::binary(n(2), BinOp::Pow, Expr::unary(UnaryOp::Neg, n(1)))
        );
    }

    #[test]
    fn test_postfix_binds_tightest() {
        assert_eq!(
            parse_str("2^3!").unwrap(),
            Expr::binary(n(2), BinOp::Pow, Expr::Postfix(Box::new(n(3)), PostfixOp::Factorial))
        );
        assert_eq!(
            parse_str("50%").unwrap(),
            Expr::Postfix(Box::new(n(50)), PostfixOp::Percent)
        );
    }

    #[test]
    fn test_functions_and_constants() {
        assert_eq!(
            parse_str("sin(π)").unwrap(),
            Expr::Function(Function::Sin, Box::new(Expr::Constant(Constant::Pi)))
        );
        assert_eq!(parse_str("√4").unwrap(), Expr::unary(UnaryOp::Sqrt, n(4)));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["2+", "(2+3", "2+3)", "()", "*", "sin(", "2#", "√"] {
            assert!(
                matches!(parse_str(bad), Err(CalculatorError::ParseError(_))),
                "{} should not parse",
                bad
            );
        }
        assert!(matches!(parse(&[]), Err(CalculatorError::ParseError(_))));
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_str(&nested(100)).unwrap(), n(1));
        for deep in [nested(600), "√".repeat(600) + "4", "2^".repeat(300) + "2"] {
            assert_eq!(
                parse_str(&deep),
                Err(CalculatorError::parse("expression nested too deeply"))
            );
        }
    }

    #[test]
    fn test_token_limit() {
        let long = "1+".repeat(600) + "1";
        assert_eq!(parse_str(&long), Err(CalculatorError::parse("expression too long")));
        assert!(parse_str(&("1+".repeat(400) + "1")).is_ok());
    }
}
