//! Abstract Syntax Tree

use numberhub_core::Number;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Number),
    Constant(Constant),
    BinaryOp(Box<Expr>, BinOp, Box<Expr>),
    UnaryOp(UnaryOp, Box<Expr>),
    Postfix(Box<Expr>, PostfixOp),
    Function(Function, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp { Add, Sub, Mul, Div, Mod, Pow }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp { Neg, Sqrt }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOp { Factorial, Percent }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function { Sin, Cos, Tan, Ln, Log }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant { Pi, E }

impl Expr {
    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(left), op, Box::new(right))
    }

    pub fn unary(op: UnaryOp, inner: Expr) -> Self {
        Expr::UnaryOp(op, Box::new(inner))
    }
}
