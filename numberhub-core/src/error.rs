//! Structured errors for the call boundary
//!
//! Every crate returns its own typed error; at the boundary they all become
//! a `HubError` carrying a machine readable code, so the caller can pick a
//! display fallback without matching on crate specific types.

use crate::{DateTimeError, NumberError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Codes carried by `HubError::code`
pub mod codes {
    // Conversion
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const INVALID_DIGIT: &str = "INVALID_DIGIT";
    pub const RATES_NOT_READY: &str = "RATES_NOT_READY";

    // Input and arithmetic
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const MATH_ERROR: &str = "MATH_ERROR";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const OVERFLOW: &str = "OVERFLOW";

    // Epoch screen
    pub const INVALID_DATE: &str = "INVALID_DATE";
    pub const INVALID_TIME: &str = "INVALID_TIME";
    pub const DATE_OVERFLOW: &str = "DATE_OVERFLOW";
    pub const DATE_PARSE_ERROR: &str = "DATE_PARSE_ERROR";

    pub const INTERNAL: &str = "INTERNAL";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Input was not usable, caller should show a fallback
    Error,
    /// Invariant violation, indicates a bug
    Fatal,
}

/// Error handed to the caller of any NumberHub entry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubError {
    /// One of [`codes`]
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Text the user typed, when it is the cause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub severity: Severity,
}

impl HubError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        HubError {
            code: code.to_string(),
            message: message.into(),
            suggestion: None,
            input: None,
            severity: Severity::Error,
        }
    }

    pub fn with_suggestion(self, suggestion: impl Into<String>) -> Self {
        HubError { suggestion: Some(suggestion.into()), ..self }
    }

    pub fn with_input(self, input: impl Into<String>) -> Self {
        HubError { input: Some(input.into()), ..self }
    }

    pub fn with_severity(self, severity: Severity) -> Self {
        HubError { severity, ..self }
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    // Conversion

    pub fn not_found(id: &str) -> Self {
        Self::new(codes::NOT_FOUND, format!("no unit with id '{}'", id))
            .with_suggestion("Pick a unit from the registry")
    }

    pub fn incompatible_units(from: &str, to: &str) -> Self {
        Self::new(
            codes::INCOMPATIBLE_UNITS,
            format!("'{}' and '{}' are in different groups", from, to),
        )
        .with_suggestion("Pick a target unit from the same group")
    }

    pub fn invalid_digit(digit: char, radix: u32) -> Self {
        Self::new(codes::INVALID_DIGIT, format!("'{}' is not a base {} digit", digit, radix))
    }

    pub fn rates_not_ready() -> Self {
        Self::new(codes::RATES_NOT_READY, "currency rates have not arrived")
            .with_suggestion("Retry once the rates have been fetched")
    }

    // Input and arithmetic

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, details)
    }

    pub fn math_error(details: impl Into<String>) -> Self {
        Self::new(codes::MATH_ERROR, details)
    }

    pub fn div_zero() -> Self {
        Self::new(codes::DIV_ZERO, "division by zero")
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, details)
    }

    pub fn overflow() -> Self {
        Self::new(codes::OVERFLOW, "result too large")
    }

    /// Broken invariant in compiled-in data
    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, details).with_severity(Severity::Fatal)
    }

    // Epoch screen

    pub fn invalid_date(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_DATE, details)
            .with_suggestion("Day and month must form a calendar date")
    }

    pub fn invalid_time(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_TIME, details)
            .with_suggestion("Hours run 00-23, minutes and seconds 00-59")
    }

    pub fn date_overflow() -> Self {
        Self::new(codes::DATE_OVERFLOW, "date outside years 0000-9999")
    }

    pub fn date_parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::DATE_PARSE_ERROR, details)
            .with_suggestion("Enter digits in HHmmssddMMyyyy order")
    }
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        match &self.suggestion {
            Some(hint) => write!(f, " (suggestion: {})", hint),
            None => Ok(()),
        }
    }
}

impl std::error::Error for HubError {}

impl From<NumberError> for HubError {
    fn from(err: NumberError) -> Self {
        let message = err.to_string();
        match err {
            NumberError::ParseError(text) => Self::parse_error(message).with_input(text),
            NumberError::DivisionByZero => Self::div_zero(),
            NumberError::DomainError(_) => Self::domain_error(message),
            NumberError::Overflow => Self::overflow(),
        }
    }
}

impl From<DateTimeError> for HubError {
    fn from(err: DateTimeError) -> Self {
        let message = err.to_string();
        match err {
            DateTimeError::InvalidMonth(_) | DateTimeError::InvalidDay(..) => Self::invalid_date(message),
            DateTimeError::InvalidHour(_)
            | DateTimeError::InvalidMinute(_)
            | DateTimeError::InvalidSecond(_) => Self::invalid_time(message),
            DateTimeError::ParseError(_) => Self::date_parse_error(message),
            DateTimeError::Overflow => Self::date_overflow(),
        }
    }
}
