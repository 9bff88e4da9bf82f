//! Expression evaluation

use numberhub_core::{Number, NumberError};
use tracing::trace;
use crate::ast::{BinOp, Constant, Expr, Function, PostfixOp, UnaryOp};
use crate::{AngleMode, CalculatorError};

/// Tree walking evaluator; holds no state between calls
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    angle_mode: AngleMode,
    precision: u32,
}

impl Evaluator {
    pub fn new(angle_mode: AngleMode, precision: u32) -> Self {
        Self { angle_mode, precision }
    }

    pub fn eval(&self, expr: &Expr) -> Result<Number, CalculatorError> {
        match expr {
            Expr::Number(n) => Ok(n.clone()),

            Expr::Constant(Constant::Pi) => Ok(Number::pi(self.precision)),
            Expr::Constant(Constant::E) => Ok(Number::e(self.precision)),

            Expr::BinaryOp(left, op, right) => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                self.eval_binary_op(&l, *op, &r)
            }

            Expr::UnaryOp(op, inner) => {
                let v = self.eval(inner)?;
                match op {
                    UnaryOp::Neg => Ok(v.neg()),
                    UnaryOp::Sqrt => Ok(v.sqrt(self.precision)?),
                }
            }

            Expr::Postfix(inner, op) => {
                let v = self.eval(inner)?;
                match op {
                    PostfixOp::Factorial => Ok(v.factorial()?),
                    PostfixOp::Percent => Ok(v.checked_div(&Number::from_i64(100))?),
                }
            }

            Expr::Function(func, arg) => {
                let v = self.eval(arg)?;
                trace!(?func, arg = %v, "function call");
                self.eval_function(*func, &v)
            }
        }
    }

    fn eval_binary_op(&self, l: &Number, op: BinOp, r: &Number) -> Result<Number, CalculatorError> {
        let result = match op {
            BinOp::Add => l.add(r),
            BinOp::Sub => l.sub(r),
            BinOp::Mul => l.mul(r)?,
            BinOp::Div => l.checked_div(r)?,
            BinOp::Mod => l.checked_rem(r)?,
            BinOp::Pow => l.pow_real(r, self.precision)?,
        };
        Ok(result)
    }

    fn eval_function(&self, func: Function, v: &Number) -> Result<Number, CalculatorError> {
        match func {
            Function::Sin | Function::Cos | Function::Tan => self.eval_trig(func, v),
            Function::Ln => Ok(v.ln(self.precision)?),
            Function::Log => Ok(v.log10(self.precision)?),
        }
    }

    fn eval_trig(&self, func: Function, v: &Number) -> Result<Number, CalculatorError> {
        if self.angle_mode == AngleMode::Deg {
            if let Some(exact) = exact_right_angle(func, v) {
                return exact;
            }
        }

        let radians = match self.angle_mode {
            AngleMode::Rad => v.clone(),
            AngleMode::Deg => v
                .mul(&Number::pi(self.precision + 10))?
                .checked_div(&Number::from_i64(180))?,
        };

        match func {
            Function::Sin => Ok(radians.sin(self.precision)?),
            Function::Cos => Ok(radians.cos(self.precision)?),
            _ => Ok(radians.tan(self.precision)?),
        }
    }
}

/// Exact trig values at whole multiples of 90 degrees, where the series
/// would otherwise leave rounding noise instead of 0 or ±1
fn exact_right_angle(func: Function, degrees: &Number) -> Option<Result<Number, CalculatorError>> {
    let quarter = degrees.checked_div(&Number::from_i64(90)).ok()?;
    if !quarter.is_integer() {
        return None;
    }
    let k = quarter
        .checked_rem(&Number::from_i64(4))
        .ok()?
        .to_i64()?
        .rem_euclid(4);

    let (sin, cos) = match k {
        0 => (0, 1),
        1 => (1, 0),
        2 => (0, -1),
        _ => (-1, 0),
    };
    let value: Result<Number, CalculatorError> = match func {
        Function::Sin => Ok(Number::from_i64(sin)),
        Function::Cos => Ok(Number::from_i64(cos)),
        _ if cos == 0 => Err(NumberError::DomainError(
            "tan undefined at odd multiples of 90°".to_string(),
        ).into()),
        _ => Ok(Number::from_i64(0)),
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::parser::parse;
    use crate::Key;
    use numberhub_core::{format, OutputFormat};

    fn eval_in(mode: AngleMode, expression: &str) -> Result<Number, CalculatorError> {
        let tokens = tokenize(&Key::parse_all(expression).unwrap())?;
        Evaluator::new(mode, 50).eval(&parse(&tokens)?)
    }

    fn rounded(mode: AngleMode, expression: &str) -> String {
        format(&eval_in(mode, expression).unwrap(), 10, OutputFormat::Plain)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(rounded(AngleMode::Rad, "2+2"), "4");
        assert_eq!(rounded(AngleMode::Rad, "1+2*3"), "7");
        assert_eq!(rounded(AngleMode::Rad, "(1+2)*3"), "9");
        assert_eq!(rounded(AngleMode::Rad, "1/3"), "0.3333333333");
        assert_eq!(rounded(AngleMode::Rad, "-2^2"), "-4");
        assert_eq!(rounded(AngleMode::Rad, "2^-2"), "0.25");
        assert_eq!(rounded(AngleMode::Rad, "2^3^2"), "512");
    }

    #[test]
    fn test_modulo_and_percent() {
        assert_eq!(rounded(AngleMode::Rad, "7#3"), "1");
        assert_eq!(rounded(AngleMode::Rad, "-7#3"), "-1");
        assert_eq!(rounded(AngleMode::Rad, "50%"), "0.5");
        assert_eq!(rounded(AngleMode::Rad, "200*15%"), "30");
    }

    #[test]
    fn test_factorial() {
        assert_eq!(rounded(AngleMode::Rad, "5!"), "120");
        assert_eq!(rounded(AngleMode::Rad, "3!!"), "720");
        assert!(matches!(eval_in(AngleMode::Rad, "(-1)!"), Err(CalculatorError::MathError(_))));
        assert!(matches!(eval_in(AngleMode::Rad, "2.5!"), Err(CalculatorError::MathError(_))));
    }

    #[test]
    fn test_degrees_vs_radians() {
        assert_eq!(rounded(AngleMode::Deg, "sin(30)"), "0.5");
        assert_eq!(rounded(AngleMode::Deg, "cos(60)"), "0.5");
        assert_eq!(rounded(AngleMode::Deg, "tan(45)"), "1");
        assert_eq!(rounded(AngleMode::Rad, "sin(30)"), "-0.9880316241");
        assert_eq!(rounded(AngleMode::Rad, "cos(π)"), "-1");
    }

    #[test]
    fn test_exact_right_angles() {
        assert_eq!(eval_in(AngleMode::Deg, "sin(180)").unwrap(), Number::from_i64(0));
        assert_eq!(eval_in(AngleMode::Deg, "cos(-90)").unwrap(), Number::from_i64(0));
        assert_eq!(eval_in(AngleMode::Deg, "sin(270)").unwrap(), Number::from_i64(-1));
        assert!(matches!(eval_in(AngleMode::Deg, "tan(90)"), Err(CalculatorError::MathError(_))));
        assert!(matches!(eval_in(AngleMode::Deg, "tan(-270)"), Err(CalculatorError::MathError(_))));
        assert_eq!(eval_in(AngleMode::Deg, "tan(360)").unwrap(), Number::from_i64(0));
    }

    #[test]
    fn test_logs_and_roots() {
        assert_eq!(rounded(AngleMode::Rad, "log(1000)"), "3");
        assert_eq!(rounded(AngleMode::Rad, "ln(e)"), "1");
        assert_eq!(rounded(AngleMode::Rad, "√16"), "4");
        assert_eq!(rounded(AngleMode::Rad, "2π"), "6.2831853072");
    }

    #[test]
    fn test_out_of_range_is_math_error() {
        for bad in ["10^2147483647", "((10^2147483647)^2147483647)^3", "10^(10^30)", "0.1^(10^30)"] {
            assert!(
                matches!(eval_in(AngleMode::Rad, bad), Err(CalculatorError::MathError(_))),
                "{} should be a math error",
                bad
            );
        }
    }

    #[test]
    fn test_trig_of_huge_argument() {
        // sin(10^80) = -0.05658992442818188003038413064704289752879...
        let value = eval_in(AngleMode::Rad, "sin(10^80)").unwrap();
        let expected = Number::from_str("-0.05658992442818188003038413064704289752879").unwrap();
        assert!(value.sub(&expected).abs() < Number::from_str("1e-38").unwrap());
    }

    #[test]
    fn test_math_errors() {
        for bad in ["1/0", "5#0", "ln(0)", "log(-1)", "√(-4)", "(-8)^0.5", "0^-1"] {
            assert!(
                matches!(eval_in(AngleMode::Rad, bad), Err(CalculatorError::MathError(_))),
                "{} should be a math error",
                bad
            );
        }
    }
}
