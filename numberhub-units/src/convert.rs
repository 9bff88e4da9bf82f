//! Conversion engine
//!
//! Proportional units go through the group's base unit, number bases through
//! an arbitrary size integer, currencies through one `RateSnapshot`.

use std::sync::Arc;
use dashu_int::UBig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use numberhub_core::{format, FormatterSymbols, Number, NumberError, OutputFormat};
use crate::currency::{CurrencyRates, RateSnapshot};
use crate::units::REGISTRY;
use crate::{ConversionError, UnitDefinition, UnitKind};

/// A conversion between two registered units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    /// Decimal text for proportional and currency units, digits for number bases
    pub input: String,
}

impl ConversionRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, input: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into(), input: input.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvertedValue {
    Decimal(Number),
    /// Uppercase digits in the target radix
    Digits(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value: ConvertedValue,
    pub scale: u32,
    pub output_format: OutputFormat,
}

impl ConversionResult {
    /// Display text with locale symbols applied; digit strings are shown as is
    pub fn render(&self, symbols: &FormatterSymbols) -> String {
        match &self.value {
            ConvertedValue::Decimal(n) => symbols.apply(&format(n, self.scale, self.output_format)),
            ConvertedValue::Digits(d) => d.clone(),
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match &self.value {
            ConvertedValue::Decimal(n) => Some(n),
            ConvertedValue::Digits(_) => None,
        }
    }
}

fn incompatible(from: &UnitDefinition, to: &UnitDefinition) -> ConversionError {
    ConversionError::IncompatibleUnits { from: from.id.to_string(), to: to.id.to_string() }
}

/// Convert between two proportional units of the same group
pub fn convert(
    from: &UnitDefinition,
    to: &UnitDefinition,
    value: &Number,
) -> Result<Number, ConversionError> {
    if !from.is_compatible(to) {
        return Err(incompatible(from, to));
    }
    match (from.factor(), to.factor()) {
        (Some(from_factor), Some(to_factor)) => {
            // base = value * from.factor; target = base / to.factor
            Ok(value.mul(from_factor)?.checked_div(to_factor)?)
        }
        _ => Err(incompatible(from, to)),
    }
}

/// Rewrite a digit string from one radix into another
pub fn convert_digits(
    from: &UnitDefinition,
    to: &UnitDefinition,
    digits: &str,
) -> Result<String, ConversionError> {
    let (Some(from_radix), Some(to_radix)) = (from.radix(), to.radix()) else {
        return Err(incompatible(from, to));
    };

    let digits = digits.trim();
    if digits.is_empty() {
        return Err(NumberError::ParseError(String::new()).into());
    }
    if let Some(bad) = digits.chars().find(|c| c.to_digit(from_radix).is_none()) {
        return Err(ConversionError::InvalidDigit { digit: bad, radix: from_radix });
    }

    let value = UBig::from_str_radix(digits, from_radix)
        .map_err(|e| NumberError::ParseError(format!("{}: {}", digits, e)))?;
    Ok(value.in_radix(to_radix).to_string().to_uppercase())
}

/// `value * rate[to] / rate[from]` against a single snapshot
pub fn convert_currency(
    snapshot: &RateSnapshot,
    from: &UnitDefinition,
    to: &UnitDefinition,
    value: &Number,
) -> Result<Number, ConversionError> {
    if from.kind != UnitKind::Currency || to.kind != UnitKind::Currency {
        return Err(incompatible(from, to));
    }
    let from_rate = snapshot.rate(from.id)?;
    let to_rate = snapshot.rate(to.id)?;
    Ok(value.mul(to_rate)?.checked_div(from_rate)?)
}

/// Dispatches requests on unit kinds; holds the shared currency rates
#[derive(Debug, Clone, Default)]
pub struct Converter {
    rates: Arc<CurrencyRates>,
}

impl Converter {
    pub fn new(rates: Arc<CurrencyRates>) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &Arc<CurrencyRates> {
        &self.rates
    }

    /// Convert a decimal value between two units looked up by id
    pub fn convert(&self, from: &str, to: &str, value: &Number) -> Result<Number, ConversionError> {
        let from = REGISTRY.get(from)?;
        let to = REGISTRY.get(to)?;
        match from.kind {
            UnitKind::Currency => self.convert_currency(from, to, value),
            _ => convert(from, to, value),
        }
    }

    fn convert_currency(
        &self,
        from: &UnitDefinition,
        to: &UnitDefinition,
        value: &Number,
    ) -> Result<Number, ConversionError> {
        let snapshot = self.rates.snapshot();
        convert_currency(&snapshot, from, to, value).inspect_err(|e| {
            if *e == ConversionError::RatesNotReady {
                warn!(from = from.id, to = to.id, "currency rates not ready");
            }
        })
    }

    /// Run a full request and keep the display settings with the result
    pub fn process(
        &self,
        request: &ConversionRequest,
        scale: u32,
        output_format: OutputFormat,
    ) -> Result<ConversionResult, ConversionError> {
        let from = REGISTRY.get(&request.from)?;
        let to = REGISTRY.get(&request.to)?;
        if !from.is_compatible(to) {
            return Err(incompatible(from, to));
        }

        let value = match from.kind {
            UnitKind::NumberBase { .. } => {
                ConvertedValue::Digits(convert_digits(from, to, &request.input)?)
            }
            UnitKind::Currency => {
                let input = Number::from_str(&request.input)?;
                ConvertedValue::Decimal(self.convert_currency(from, to, &input)?)
            }
            UnitKind::Normal { .. } => {
                let input = Number::from_str(&request.input)?;
                ConvertedValue::Decimal(convert(from, to, &input)?)
            }
        };

        debug!(from = from.id, to = to.id, input = %request.input, "converted");
        Ok(ConversionResult { value, scale, output_format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitGroup;
    use std::collections::HashMap;

    fn unit(id: &str) -> &'static UnitDefinition {
        REGISTRY.get(id).unwrap()
    }

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    fn ready_rates() -> Arc<CurrencyRates> {
        let mut table = HashMap::new();
        table.insert("eur".to_string(), num("0.92"));
        table.insert("jpy".to_string(), num("150"));
        Arc::new(CurrencyRates::with_snapshot(RateSnapshot::new("usd", table)))
    }

    #[test]
    fn test_kilometer_to_meter() {
        let result = convert(unit("kilometer"), unit("meter"), &Number::from_i64(1)).unwrap();
        assert_eq!(result, Number::from_i64(1000));
    }

    #[test]
    fn test_pascal_to_bar() {
        let result = convert(unit("pascal"), unit("bar"), &Number::from_i64(100)).unwrap();
        assert_eq!(result, num("0.001"));
    }

    #[test]
    fn test_imperial_exact() {
        let result = convert(unit("mile"), unit("foot"), &Number::from_i64(1)).unwrap();
        assert_eq!(result, Number::from_i64(5280));
        let result = convert(unit("pound"), unit("ounce"), &Number::from_i64(1)).unwrap();
        assert_eq!(result, Number::from_i64(16));
    }

    #[test]
    fn test_angle_radian() {
        let result = convert(unit("turn"), unit("radian"), &Number::from_i64(1)).unwrap();
        assert_eq!(format(&result, 10, OutputFormat::Plain), "6.2831853072");
    }

    #[test]
    fn test_cross_group_is_incompatible() {
        let err = convert(unit("meter"), unit("second"), &Number::from_i64(1)).unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleUnits { .. }));

        let err = convert_digits(unit("binary"), unit("meter"), "1").unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleUnits { .. }));
    }

    #[test]
    fn test_round_trip() {
        let value = num("123.456");
        let pairs = [
            ("inch", "centimeter"),
            ("hour", "millisecond"),
            ("acre", "hectare"),
            ("gigabyte", "gibibyte"),
        ];
        for (a, b) in pairs {
            let there = convert(unit(a), unit(b), &value).unwrap();
            let back = convert(unit(b), unit(a), &there).unwrap();
            let diff = back.sub(&value).abs();
            assert!(diff < num("1e-80"), "{} <-> {} drifted", a, b);
        }
    }

    #[test]
    fn test_round_trip_every_pair() {
        let value = num("0.5772156649");
        let tolerance = num("1e-85");
        for group in REGISTRY.groups() {
            let units = REGISTRY.group(group);
            for a in units.iter().filter(|u| u.factor().is_some()) {
                for b in units.iter().filter(|u| u.factor().is_some()) {
                    let back = convert(b, a, &convert(a, b, &value).unwrap()).unwrap();
                    assert!(back.sub(&value).abs() < tolerance, "{} <-> {} drifted", a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn test_number_base_round_trip_every_pair() {
        let bases = REGISTRY.group(UnitGroup::NumberBase);
        let source = unit("decimal");
        for target in bases {
            let digits = convert_digits(source, target, "1234567890123").unwrap();
            assert_eq!(convert_digits(target, source, &digits).unwrap(), "1234567890123");
        }
    }

    #[test]
    fn test_hex_to_decimal() {
        assert_eq!(convert_digits(unit("hexadecimal"), unit("decimal"), "FF").unwrap(), "255");
        assert_eq!(convert_digits(unit("hexadecimal"), unit("decimal"), "ff").unwrap(), "255");
        assert_eq!(convert_digits(unit("decimal"), unit("hexadecimal"), "48879").unwrap(), "BEEF");
        assert_eq!(convert_digits(unit("binary"), unit("octal"), "000101").unwrap(), "5");
    }

    #[test]
    fn test_invalid_digit() {
        let err = convert_digits(unit("hexadecimal"), unit("decimal"), "G").unwrap_err();
        assert_eq!(err, ConversionError::InvalidDigit { digit: 'G', radix: 16 });

        let err = convert_digits(unit("binary"), unit("decimal"), "102").unwrap_err();
        assert_eq!(err, ConversionError::InvalidDigit { digit: '2', radix: 2 });

        assert!(convert_digits(unit("binary"), unit("decimal"), "").is_err());
    }

    #[test]
    fn test_large_number_base() {
        let digits = "F".repeat(40);
        let decimal = convert_digits(unit("hexadecimal"), unit("decimal"), &digits).unwrap();
        let back = convert_digits(unit("decimal"), unit("hexadecimal"), &decimal).unwrap();
        assert_eq!(back, digits);
    }

    #[test]
    fn test_currency_not_ready() {
        let converter = Converter::default();
        let err = converter.convert("usd", "eur", &Number::from_i64(1)).unwrap_err();
        assert_eq!(err, ConversionError::RatesNotReady);
    }

    #[test]
    fn test_currency_ready() {
        let converter = Converter::new(ready_rates());
        let result = converter.convert("usd", "eur", &Number::from_i64(100)).unwrap();
        assert_eq!(result, Number::from_i64(92));

        let result = converter.convert("eur", "jpy", &num("9.2")).unwrap();
        assert_eq!(result, Number::from_i64(1500));

        // Missing rate in a ready snapshot
        let err = converter.convert("usd", "gbp", &Number::from_i64(1)).unwrap_err();
        assert_eq!(err, ConversionError::RatesNotReady);
    }

    #[test]
    fn test_process_dispatch() {
        let converter = Converter::new(ready_rates());

        let result = converter
            .process(&ConversionRequest::new("kilometer", "meter", "1.5"), 3, OutputFormat::Plain)
            .unwrap();
        assert_eq!(result.as_number(), Some(&Number::from_i64(1500)));
        assert_eq!(result.render(&FormatterSymbols::comma()), "1,500");

        let result = converter
            .process(
                &ConversionRequest::new("binary", "hexadecimal", "11111111"),
                3,
                OutputFormat::Plain,
            )
            .unwrap();
        assert_eq!(result.value, ConvertedValue::Digits("FF".to_string()));
        assert_eq!(result.render(&FormatterSymbols::spaces()), "FF");

        let err = converter
            .process(&ConversionRequest::new("meter", "kilometer", "abc"), 3, OutputFormat::Plain)
            .unwrap_err();
        assert!(matches!(err, ConversionError::Number(NumberError::ParseError(_))));

        let err = converter
            .process(&ConversionRequest::new("meter", "usd", "1"), 3, OutputFormat::Plain)
            .unwrap_err();
        assert!(matches!(err, ConversionError::IncompatibleUnits { .. }));

        let err = converter
            .process(&ConversionRequest::new("meter", "furlong", "1"), 3, OutputFormat::Plain)
            .unwrap_err();
        assert_eq!(err, ConversionError::NotFound("furlong".to_string()));
    }
}
