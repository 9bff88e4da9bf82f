//! NumberHub Units - Unit registry and conversion engine
//!
//! Units are grouped; conversion only happens inside a group.
//!
//! Kinds:
//! - Proportional units (length, time, mass, volume, area, speed, pressure,
//!   energy, power, angle, data storage) scale through an exact factor
//! - Number bases (binary through hexadecimal) rewrite digit strings
//! - Currencies use the current rate snapshot

mod collections;
mod convert;
mod currency;
mod group;
mod unit;
mod units;

pub use convert::{
    convert, convert_currency, convert_digits, ConversionRequest, ConversionResult, ConvertedValue, Converter,
};
pub use currency::{CurrencyRates, RateSnapshot};
pub use group::UnitGroup;
pub use unit::{ConversionError, UnitDefinition, UnitKind};
pub use units::{UnitRegistry, REGISTRY};
