//! Unit representation with conversion kinds

use std::fmt;
use serde::Serialize;
use thiserror::Error;
use numberhub_core::{HubError, Number, NumberError};
use crate::UnitGroup;

/// How values of a unit are converted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnitKind {
    /// Proportional unit: `base = value * factor`
    Normal { factor: Number },
    /// Rate comes from the current `RateSnapshot`
    Currency,
    /// Digit string in the given radix
    NumberBase { radix: u32 },
}

/// A registered unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDefinition {
    /// Unique identifier (e.g., "kilometer", "hexadecimal", "eur")
    pub id: &'static str,
    pub group: UnitGroup,
    pub kind: UnitKind,
    /// Display name (e.g., "Kilometer")
    pub name: &'static str,
    /// Abbreviation (e.g., "km")
    pub short_name: &'static str,
}

impl UnitDefinition {
    pub fn normal(
        id: &'static str,
        group: UnitGroup,
        factor: Number,
        name: &'static str,
        short_name: &'static str,
    ) -> Self {
        Self { id, group, kind: UnitKind::Normal { factor }, name, short_name }
    }

    pub fn currency(id: &'static str, name: &'static str, short_name: &'static str) -> Self {
        Self { id, group: UnitGroup::Currency, kind: UnitKind::Currency, name, short_name }
    }

    pub fn number_base(
        id: &'static str,
        radix: u32,
        name: &'static str,
        short_name: &'static str,
    ) -> Self {
        let kind = UnitKind::NumberBase { radix };
        Self { id, group: UnitGroup::NumberBase, kind, name, short_name }
    }

    /// Scale factor for proportional units
    pub fn factor(&self) -> Option<&Number> {
        match &self.kind {
            UnitKind::Normal { factor } => Some(factor),
            _ => None,
        }
    }

    /// Radix for number base units
    pub fn radix(&self) -> Option<u32> {
        match self.kind {
            UnitKind::NumberBase { radix } => Some(radix),
            _ => None,
        }
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &UnitDefinition) -> bool {
        self.group == other.group
    }

    /// Case-insensitive match on id, name and short name
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.id.to_lowercase().contains(&query)
            || self.name.to_lowercase().contains(&query)
            || self.short_name.to_lowercase().contains(&query)
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unknown unit: {0}")]
    NotFound(String),

    #[error("cannot convert {from} to {to}: incompatible units")]
    IncompatibleUnits { from: String, to: String },

    #[error("invalid digit '{digit}' for base {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    #[error("currency rates are not ready")]
    RatesNotReady,

    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}

impl From<ConversionError> for HubError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::NotFound(id) => HubError::not_found(&id).with_input(id),
            ConversionError::IncompatibleUnits { from, to } => {
                HubError::incompatible_units(&from, &to)
            }
            ConversionError::InvalidDigit { digit, radix } => HubError::invalid_digit(digit, radix),
            ConversionError::RatesNotReady => HubError::rates_not_ready(),
            ConversionError::Number(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numberhub_core::codes;

    fn meter() -> UnitDefinition {
        UnitDefinition::normal("meter", UnitGroup::Length, Number::from_i64(1), "Meter", "m")
    }

    fn second() -> UnitDefinition {
        UnitDefinition::normal("second", UnitGroup::Time, Number::from_i64(1), "Second", "s")
    }

    #[test]
    fn test_kind_accessors() {
        let m = meter();
        assert_eq!(m.factor(), Some(&Number::from_i64(1)));
        assert_eq!(m.radix(), None);

        let hex = UnitDefinition::number_base("hexadecimal", 16, "Hexadecimal", "hex");
        assert_eq!(hex.radix(), Some(16));
        assert!(hex.factor().is_none());
    }

    #[test]
    fn test_compatible_units() {
        let thousand = Number::from_i64(1000);
        let km =
            UnitDefinition::normal("kilometer", UnitGroup::Length, thousand, "Kilometer", "km");
        assert!(meter().is_compatible(&km));
        assert!(!meter().is_compatible(&second()));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let m = meter();
        assert!(m.matches("MET"));
        assert!(m.matches("m"));
        assert!(!m.matches("sec"));
    }

    #[test]
    fn test_error_codes() {
        let err: HubError = ConversionError::NotFound("furlong".to_string()).into();
        assert_eq!(err.code, codes::NOT_FOUND);
        assert_eq!(err.input.as_deref(), Some("furlong"));

        let err: HubError = ConversionError::InvalidDigit { digit: 'G', radix: 16 }.into();
        assert_eq!(err.code, codes::INVALID_DIGIT);

        let err: HubError = ConversionError::Number(NumberError::DivisionByZero).into();
        assert_eq!(err.code, codes::DIV_ZERO);
    }
}
