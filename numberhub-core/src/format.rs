//! Decimal formatting
//!
//! Renders a `Number` into a locale agnostic string (`.` as decimal point,
//! `-` as sign, `E+n` / `E-n` exponents) and then, as a separate pass,
//! substitutes grouping and fractional symbols for display.
//!
//! Rounding is HALF_UP (ties away from zero) and works on the exact decimal
//! digits of the value.

use dashu_base::{Sign, UnsignedAbs};
use serde::{Deserialize, Serialize};
use crate::Number;

/// Adjusted exponents outside `[-6, 16)` switch `AllowEngineering` to scientific notation
const ENGINEERING_MIN_EXPONENT: isize = -6;
const ENGINEERING_MAX_EXPONENT: isize = 16;

/// How a result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed point, e.g. "1234.5"
    #[default]
    Plain,
    /// Fixed point unless the value is very large or very small
    AllowEngineering,
    /// Always scientific, e.g. "1.2345E+3"
    ForceEngineering,
}

/// Grouping and decimal point symbols substituted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterSymbols {
    pub grouping: String,
    pub fractional: String,
}

impl FormatterSymbols {
    pub fn new(grouping: impl Into<String>, fractional: impl Into<String>) -> Self {
        Self {
            grouping: grouping.into(),
            fractional: fractional.into(),
        }
    }

    /// "1 234 567.89"
    pub fn spaces() -> Self {
        Self::new(" ", ".")
    }

    /// "1.234.567,89"
    pub fn period() -> Self {
        Self::new(".", ",")
    }

    /// "1,234,567.89"
    pub fn comma() -> Self {
        Self::new(",", ".")
    }

    /// Substitute symbols in every number found in `expression`
    ///
    /// Works on a single formatted number as well as on a whole calculator
    /// expression such as "12345+0.5". Characters outside digit runs are
    /// copied unchanged, and so are the digits of an `E+n` / `E-n` exponent.
    pub fn apply(&self, expression: &str) -> String {
        let mut out = String::with_capacity(expression.len() + expression.len() / 3);
        let mut run = String::new();
        let mut in_exponent = false;
        let mut prev = None;

        for c in expression.chars() {
            if in_exponent {
                let sign = matches!(c, '+' | '-') && prev == Some('E');
                if sign || c.is_ascii_digit() {
                    out.push(c);
                    prev = Some(c);
                    continue;
                }
                in_exponent = false;
            }

            if c.is_ascii_digit() || c == '.' {
                run.push(c);
            } else {
                if !run.is_empty() {
                    out.push_str(&self.apply_number(&run));
                    run.clear();
                }
                out.push(c);
                in_exponent = c == 'E';
            }
            prev = Some(c);
        }
        if !run.is_empty() {
            out.push_str(&self.apply_number(&run));
        }
        out
    }

    fn apply_number(&self, number: &str) -> String {
        let (int_part, frac_part) = match number.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (number, None),
        };

        let mut grouped = String::with_capacity(int_part.len() * 2);
        let len = int_part.len();
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push_str(&self.grouping);
            }
            grouped.push(c);
        }

        match frac_part {
            Some(frac) => format!("{}{}{}", grouped, self.fractional, frac),
            None => grouped,
        }
    }
}

impl Default for FormatterSymbols {
    fn default() -> Self {
        Self::spaces()
    }
}

/// Format `value` with `scale` digits after the decimal point
///
/// In plain notation, zeros between the decimal point and the first
/// significant digit of a value below one do not count against `scale`, so
/// `0.000001234` at scale 3 renders as "0.00000123" instead of "0".
/// In scientific notation `scale` bounds the digits after the mantissa point.
pub fn format(value: &Number, scale: u32, output_format: OutputFormat) -> String {
    let digits = Digits::from_number(value);
    if digits.is_zero() {
        return "0".to_string();
    }

    match output_format {
        OutputFormat::Plain => digits.round_plain(scale).render_plain(),
        OutputFormat::ForceEngineering => digits.render_scientific(scale),
        OutputFormat::AllowEngineering => {
            let plain = digits.round_plain(scale);
            let exponent = plain.adjusted_exponent();
            if plain.is_zero()
                || (ENGINEERING_MIN_EXPONENT..ENGINEERING_MAX_EXPONENT).contains(&exponent)
            {
                plain.render_plain()
            } else {
                digits.render_scientific(scale)
            }
        }
    }
}

/// Full precision plain rendering, no rounding
pub fn to_plain_string(value: &Number) -> String {
    Digits::from_number(value).render_plain()
}

/// Sign, decimal digits and exponent: `value = ±digits * 10^exponent`
///
/// `digits` never has leading zeros; zero is the single digit "0".
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits {
    negative: bool,
    digits: String,
    exponent: isize,
}

impl Digits {
    fn from_number(value: &Number) -> Self {
        let (significand, exponent) = value.to_parts();
        let negative = significand.sign() == Sign::Negative;
        let digits = significand.unsigned_abs().to_string();
        Self { negative, digits, exponent }.normalized()
    }

    fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Exponent of the leading digit, e.g. 2 for 123.4 and -3 for 0.00123
    fn adjusted_exponent(&self) -> isize {
        self.digits.len() as isize - 1 + self.exponent
    }

    /// Strip leading and trailing zeros; zero loses its sign
    fn normalized(mut self) -> Self {
        let trimmed = self.digits.trim_start_matches('0');
        self.digits = if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() };

        if self.is_zero() {
            self.negative = false;
            self.exponent = 0;
            return self;
        }

        let without_trailing = self.digits.trim_end_matches('0');
        self.exponent += (self.digits.len() - without_trailing.len()) as isize;
        self.digits.truncate(without_trailing.len());
        self
    }

    /// Round HALF_UP to `places` digits after the decimal point
    fn round_to_places(&self, places: isize) -> Self {
        if -self.exponent <= places {
            return self.clone();
        }

        let drop = (-self.exponent - places) as usize;
        let len = self.digits.len();
        if drop > len {
            return Self { negative: false, digits: "0".to_string(), exponent: 0 };
        }

        let (kept, rest) = self.digits.split_at(len - drop);
        let round_up = rest.as_bytes()[0] >= b'5';
        let mut kept = if kept.is_empty() { "0".to_string() } else { kept.to_string() };
        if round_up {
            kept = increment(&kept);
        }

        Self {
            negative: self.negative,
            digits: kept,
            exponent: -places,
        }
        .normalized()
    }

    /// Plain rounding with the minimum required scale for values below one
    fn round_plain(&self, scale: u32) -> Self {
        let adjusted = self.adjusted_exponent();
        let leading_zeros = if adjusted < 0 { -adjusted - 1 } else { 0 };
        self.round_to_places(scale as isize + leading_zeros)
    }

    fn render_plain(&self) -> String {
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }

        if self.exponent >= 0 {
            out.push_str(&self.digits);
            out.extend(std::iter::repeat('0').take(self.exponent as usize));
            return out;
        }

        let frac_len = (-self.exponent) as usize;
        if self.digits.len() > frac_len {
            let (int_part, frac_part) = self.digits.split_at(self.digits.len() - frac_len);
            out.push_str(int_part);
            out.push('.');
            out.push_str(frac_part);
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take(frac_len - self.digits.len()));
            out.push_str(&self.digits);
        }
        out
    }

    fn render_scientific(&self, scale: u32) -> String {
        let mut exponent = self.adjusted_exponent();

        // Mantissa d.ddd keeps the same digits, shifted next to the point
        let mantissa = Self {
            negative: self.negative,
            digits: self.digits.clone(),
            exponent: self.exponent - exponent,
        };
        let mut rounded = mantissa.round_to_places(scale as isize);

        // 9.99 can round up to 10.0
        let carry = rounded.adjusted_exponent();
        if carry != 0 {
            exponent += carry;
            rounded.exponent -= carry;
        }

        format!("{}E{:+}", rounded.render_plain(), exponent)
    }
}

/// Add one to a string of decimal digits
fn increment(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    let mut out = String::with_capacity(bytes.len() + 1);
    out.push('1');
    out.push_str(&String::from_utf8_lossy(&bytes));
    out
}
