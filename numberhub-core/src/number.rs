//! Decimal numbers for conversions and the calculator
//!
//! `Number` wraps a dashu `DBig`. Unit scale factors, user input and
//! calculator results all live in this type, so no value ever passes through
//! binary floating point.

use dashu_float::ops::{Abs, SquareRoot};
use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("not a number: '{0}'")]
    ParseError(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("{0}")]
    DomainError(String),

    #[error("result too large")]
    Overflow,
}

/// Significant digits kept by every `Number`
///
/// Large enough that the widest registry ratio (exa- to atto-) times a
/// long user input is still represented exactly.
pub const WORK_PRECISION: usize = 100;

/// Digits computed by transcendental functions unless asked otherwise
pub const DEFAULT_PRECISION: u32 = 50;

/// Largest argument accepted by `factorial`
const MAX_FACTORIAL: i64 = 10_000;

/// Extra digits carried through series so the last requested digit is right
const GUARD_DIGITS: usize = 10;

/// Largest decimal exponent, either sign, a `Number` may carry; keeps plain
/// renderings of any value to about a million characters
pub const MAX_EXPONENT: isize = 1_000_000;

/// `MAX_EXPONENT * ln 10`, the largest argument `e^x` may take in `pow_real`
const MAX_EXP_ARGUMENT: i64 = 2_302_585;

/// Integer digits of an angle that range reduction still resolves
const MAX_ANGLE_DIGITS: usize = 1_000;

#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    fn wrap(value: DBig) -> Self {
        Number { inner: value.with_precision(WORK_PRECISION).value() }
    }

    /// Copy of the value carrying `digits` of precision
    fn at_precision(&self, digits: usize) -> DBig {
        self.inner.clone().with_precision(digits).value()
    }

    fn domain(message: &str) -> NumberError {
        NumberError::DomainError(message.to_string())
    }

    fn check_exponent(exponent: isize) -> Result<(), NumberError> {
        if exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
            return Err(NumberError::Overflow);
        }
        Ok(())
    }

    /// Decimal digits before the point; zero or negative below 1
    fn magnitude(&self) -> isize {
        let (significand, exponent) = self.to_parts();
        let digits = significand.to_string().trim_start_matches('-').len() as isize;
        digits.saturating_add(exponent)
    }

    /// Parse user or table input.
    ///
    /// Accepts plain decimals ("3.14", "-42", ".5", "5."), an exponent
    /// ("1.5e10", "1609.344e18", "25E-3") and integer ratios ("1/3").
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let text = s.trim();
        let invalid = || NumberError::ParseError(text.to_string());
        if text.is_empty() {
            return Err(invalid());
        }

        if let Some((num, den)) = text.split_once('/') {
            let is_int = |p: &str| {
                let p = p.trim().trim_start_matches(['-', '+']);
                !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())
            };
            if !is_int(num) || !is_int(den) {
                return Err(invalid());
            }
            return Self::from_str(num)?.checked_div(&Self::from_str(den)?);
        }

        if let Some(pos) = text.find(['e', 'E']) {
            let mantissa = Self::from_str(&text[..pos]).map_err(|_| invalid())?;
            let shift: isize = text[pos + 1..].parse().map_err(|_| invalid())?;
            let (significand, exponent) = mantissa.to_parts();
            let exponent = exponent.checked_add(shift).ok_or(NumberError::Overflow)?;
            Self::check_exponent(exponent)?;
            return Ok(Self::from_parts(significand, exponent));
        }

        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (int_digits, frac_digits) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if int_digits.len() + frac_digits.len() == 0 || !all_digits(int_digits) || !all_digits(frac_digits) {
            return Err(invalid());
        }

        // digits without the point, scaled back by the fraction length
        let digits = format!("{}{}", int_digits, frac_digits);
        let mut significand: IBig = digits.parse().map_err(|_| invalid())?;
        if negative {
            significand = -significand;
        }
        Ok(Self::from_parts(significand, -(frac_digits.len() as isize)))
    }

    pub fn from_i64(n: i64) -> Self {
        Self::wrap(DBig::from(n))
    }

    /// `num / den`, exact up to the working precision
    pub fn from_ratio(num: i64, den: i64) -> Result<Self, NumberError> {
        Self::from_i64(num).checked_div(&Self::from_i64(den))
    }

    /// `significand * 10^exponent`
    pub fn from_parts(significand: IBig, exponent: isize) -> Self {
        Self::wrap(DBig::from_parts(significand, exponent))
    }

    /// Inverse of `from_parts`
    pub fn to_parts(&self) -> (IBig, isize) {
        self.inner.clone().into_repr().into_parts()
    }

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    pub fn is_integer(&self) -> bool {
        self.inner.clone().floor() == self.inner
    }

    pub fn add(&self, other: &Self) -> Self {
        Number { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Number { inner: &self.inner - &other.inner }
    }

    /// Product; `Overflow` when the exponents add up past `MAX_EXPONENT`
    pub fn mul(&self, other: &Self) -> Result<Self, NumberError> {
        let (_, left) = self.to_parts();
        let (_, right) = other.to_parts();
        Self::check_exponent(left.checked_add(right).ok_or(NumberError::Overflow)?)?;
        Ok(Number { inner: &self.inner * &other.inner })
    }

    pub fn neg(&self) -> Self {
        Number { inner: -&self.inner }
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        let (_, left) = self.to_parts();
        let (_, right) = other.to_parts();
        Self::check_exponent(left.checked_sub(right).ok_or(NumberError::Overflow)?)?;
        Ok(Number { inner: &self.inner / &other.inner })
    }

    /// Remainder of truncated division; the result takes the sign of `self`
    pub fn checked_rem(&self, other: &Self) -> Result<Self, NumberError> {
        let quotient = self.checked_div(other)?.trunc();
        Ok(self.sub(&quotient.mul(other)?))
    }

    /// Exact integer power by repeated squaring
    pub fn pow(&self, exp: i32) -> Result<Self, NumberError> {
        let one = Self::from_i64(1);
        let mut acc = one.clone();
        let mut square = self.clone();
        let mut bits = exp.unsigned_abs();
        while bits != 0 {
            if bits & 1 == 1 {
                acc = acc.mul(&square)?;
            }
            bits >>= 1;
            if bits != 0 {
                square = square.mul(&square)?;
            }
        }

        if exp < 0 {
            one.checked_div(&acc)
        } else {
            Ok(acc)
        }
    }

    /// `self^exp` for any real exponent; integer exponents stay exact
    pub fn pow_real(&self, exp: &Self, precision: u32) -> Result<Self, NumberError> {
        if let Some(n) = exp.to_i64().and_then(|n| i32::try_from(n).ok()) {
            return self.pow(n);
        }
        if self.is_zero() {
            return if exp.is_negative() {
                Err(NumberError::DivisionByZero)
            } else {
                Ok(Self::from_i64(0))
            };
        }
        if self.is_negative() {
            return Err(Self::domain("non-integer power of a negative number"));
        }

        // x^y = e^(y ln x)
        let exponent = &self.at_precision(precision as usize).ln() * &exp.inner;
        if Abs::abs(exponent.clone()) > DBig::from(MAX_EXP_ARGUMENT) {
            return Err(NumberError::Overflow);
        }
        Ok(Self::wrap(exponent.exp()))
    }

    /// n! for non-negative integers up to `MAX_FACTORIAL`
    pub fn factorial(&self) -> Result<Self, NumberError> {
        if self.is_negative() || !self.is_integer() {
            return Err(Self::domain("factorial needs a non-negative integer"));
        }
        let n = self.to_i64().ok_or(NumberError::Overflow)?;
        if n > MAX_FACTORIAL {
            return Err(NumberError::Overflow);
        }

        let product = (2..=n).fold(IBig::ONE, |acc, k| acc * IBig::from(k));
        Ok(Self::from_parts(product, 0))
    }

    pub fn sqrt(&self, precision: u32) -> Result<Self, NumberError> {
        if self.is_negative() {
            return Err(Self::domain("square root of a negative number"));
        }
        if self.is_zero() {
            return Ok(self.clone());
        }
        Ok(Self::wrap(self.at_precision(precision as usize).sqrt()))
    }

    pub fn ln(&self, precision: u32) -> Result<Self, NumberError> {
        if self.is_zero() || self.is_negative() {
            return Err(Self::domain("logarithm of a non-positive number"));
        }
        Ok(Self::wrap(self.at_precision(precision as usize).ln()))
    }

    pub fn log10(&self, precision: u32) -> Result<Self, NumberError> {
        let guarded = precision + 5;
        self.ln(guarded)?.checked_div(&Self::from_i64(10).ln(guarded)?)
    }

    pub fn exp(&self, precision: u32) -> Self {
        Self::wrap(self.at_precision(precision as usize).exp())
    }

    pub fn sin(&self, precision: u32) -> Result<Self, NumberError> {
        let x = self.reduce_angle(precision)?;
        Ok(Self::wrap(alternating_series(&x, x.clone(), 1, precision)))
    }

    pub fn cos(&self, precision: u32) -> Result<Self, NumberError> {
        let x = self.reduce_angle(precision)?;
        let one = DBig::ONE.with_precision(precision as usize + GUARD_DIGITS).value();
        Ok(Self::wrap(alternating_series(&x, one, 0, precision)))
    }

    pub fn tan(&self, precision: u32) -> Result<Self, NumberError> {
        let cos = self.cos(precision)?;
        // cos never hits zero exactly at odd multiples of π/2, only rounding noise
        let noise = Self::from_parts(IBig::ONE, 5 - precision as isize);
        if cos.abs() < noise {
            return Err(Self::domain("tan undefined at odd multiples of π/2"));
        }
        self.sin(precision)?.checked_div(&cos)
    }

    /// Angle shifted into [-π, π), kept to `precision` fraction digits.
    ///
    /// Subtracting whole turns cancels the integer digits of the angle, so π
    /// carries that many extra digits.
    fn reduce_angle(&self, precision: u32) -> Result<DBig, NumberError> {
        let integer_digits = self.magnitude().max(0).unsigned_abs();
        if integer_digits > MAX_ANGLE_DIGITS {
            return Err(Self::domain("angle too large to reduce"));
        }
        let digits = precision as usize + GUARD_DIGITS + integer_digits;

        let x = self.at_precision(digits);
        let pi = machin_pi(digits);
        let turn = &pi + &pi;
        let turns = ((&x + &pi) / &turn).floor();
        let reduced = &x - &(&turns * &turn);
        Ok(reduced.with_precision(precision as usize + GUARD_DIGITS).value())
    }

    /// π truncated to `precision` fraction digits
    pub fn pi(precision: u32) -> Self {
        let shift = DBig::from_parts(IBig::ONE, precision as isize);
        let scaled = &machin_pi(precision as usize + GUARD_DIGITS) * &shift;
        let (significand, exponent) = scaled.floor().into_repr().into_parts();
        Self::from_parts(significand, exponent - precision as isize)
    }

    pub fn e(precision: u32) -> Self {
        Self::from_i64(1).exp(precision)
    }

    pub fn abs(&self) -> Self {
        Number { inner: Abs::abs(self.inner.clone()) }
    }

    pub fn floor(&self) -> Self {
        Number { inner: self.inner.clone().floor() }
    }

    pub fn ceil(&self) -> Self {
        Number { inner: self.inner.clone().ceil() }
    }

    /// Round toward zero
    pub fn trunc(&self) -> Self {
        if self.is_negative() {
            self.ceil()
        } else {
            self.floor()
        }
    }

    /// Integer value, if it is one and fits
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        let (significand, exponent) = self.to_parts();
        let value = if exponent >= 0 {
            let scale = u32::try_from(exponent).ok().filter(|e| *e <= 18)?;
            significand * IBig::from(10u32).pow(scale as usize)
        } else {
            // integral values have trailing zeros in the significand
            let scale = u32::try_from(-exponent).ok().filter(|e| *e <= 38)?;
            significand / IBig::from(10u32).pow(scale as usize)
        };
        i64::try_from(value).ok()
    }
}

/// Sum of `first * Π (-x² / ((2k-1+shift)(2k+shift)))`: the Taylor series of
/// sin (`shift` 1, `first` x) and cos (`shift` 0, `first` 1)
fn alternating_series(x: &DBig, first: DBig, shift: i64, precision: u32) -> DBig {
    let x_squared = x * x;
    // |x| <= π after reduction, so about two terms per three digits
    let terms = (precision as i64 * 2 / 3 + 10).max(20);

    let mut term = first.clone();
    let mut sum = first;
    for k in 1..terms {
        let denominator = DBig::from((2 * k - 1 + shift) * (2 * k + shift));
        term = -&term * &x_squared / denominator;
        sum = &sum + &term;
    }
    sum
}

/// π to `digits` significant digits by Machin's formula
fn machin_pi(digits: usize) -> DBig {
    DBig::from(16i64) * arctan_inverse(5, digits) - DBig::from(4i64) * arctan_inverse(239, digits)
}

/// arctan(1/n) = Σ (-1)^k / ((2k+1) n^(2k+1)), summed to `digits`
fn arctan_inverse(n: i64, digits: usize) -> DBig {
    let cutoff = DBig::from_parts(IBig::ONE, -(digits as isize));
    let n_squared = DBig::from(n * n);

    let mut power = DBig::ONE.with_precision(digits).value() / DBig::from(n);
    let mut sum = power.clone();
    for k in 1i64.. {
        power = &power / &n_squared;
        let term = &power / &DBig::from(2 * k + 1);
        if term < cutoff {
            break;
        }
        sum = if k % 2 == 1 { &sum - &term } else { &sum + &term };
    }
    sum
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::to_plain_string(self))
    }
}

/// Serialized as a decimal string so no digits are lost
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Number::from_str(&text).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(Ordering::Equal)
    }
}
