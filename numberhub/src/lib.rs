//! NumberHub - unit conversion, calculator and epoch conversion engine
//!
//! `NumberHub` ties the pieces together with one set of user settings:
//!
//! ```ignore
//! let hub = NumberHub::new();
//! let text = hub.convert_formatted(&ConversionRequest::new("kilometer", "meter", "1"))?;
//! assert_eq!(text, "1 000");
//! ```
//!
//! Every fallible entry point returns a `HubError` with a machine readable
//! code; the caller decides what to display instead.

mod settings;

pub use settings::{Settings, DEFAULT_SCALE, MAX_SCALE};

pub use numberhub_calc::{AngleMode, Calculator, CalculatorError, ExpressionBuffer, Key};
pub use numberhub_core::{
    codes, EpochDate, FormatterSymbols, HubError, Number, OutputFormat, Severity,
};
pub use numberhub_units::{
    ConversionError, ConversionRequest, ConversionResult, ConvertedValue, Converter, CurrencyRates,
    RateSnapshot, UnitDefinition, UnitGroup, UnitKind, UnitRegistry, REGISTRY,
};

use numberhub_core::epoch;
use std::sync::Arc;
use tracing::warn;

/// Main NumberHub engine
#[derive(Debug, Clone)]
pub struct NumberHub {
    converter: Converter,
    settings: Settings,
}

impl NumberHub {
    pub fn new() -> Self {
        Self {
            converter: Converter::default(),
            settings: Settings::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Share a rate holder with the component that fetches rates
    pub fn with_rates(mut self, rates: Arc<CurrencyRates>) -> Self {
        self.converter = Converter::new(rates);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rates(&self) -> &Arc<CurrencyRates> {
        self.converter.rates()
    }

    /// Publish a new rate snapshot
    pub fn update_rates(&self, snapshot: RateSnapshot) {
        self.converter.rates().update(snapshot);
    }

    pub fn registry(&self) -> &'static UnitRegistry {
        &REGISTRY
    }

    // ========== Conversion ==========

    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, HubError> {
        self.converter
            .process(request, self.settings.scale, self.settings.output_format)
            .map_err(HubError::from)
    }

    /// Convert and render with the configured scale, format and symbols
    pub fn convert_formatted(&self, request: &ConversionRequest) -> Result<String, HubError> {
        let result = self.convert(request)?;
        Ok(result.render(&self.settings.formatter_symbols))
    }

    /// Label shown next to a target unit in the unit list: the converted
    /// value followed by the unit's short name, or the short name alone when
    /// there is nothing to show.
    pub fn support_label(&self, from_id: &str, to_id: &str, input: &str) -> String {
        let short_name = match REGISTRY.get(to_id) {
            Ok(unit) => unit.short_name,
            Err(e) => {
                warn!(unit = to_id, error = %e, "support label for unknown unit");
                return to_id.to_string();
            }
        };

        if input.trim().is_empty() {
            return short_name.to_string();
        }
        let from_is_currency = REGISTRY
            .get(from_id)
            .is_ok_and(|unit| unit.kind == UnitKind::Currency);
        if from_is_currency && !self.rates().is_ready() {
            return short_name.to_string();
        }

        match self.convert_formatted(&ConversionRequest::new(from_id, to_id, input)) {
            Ok(value) => format!("{} {}", value, short_name),
            Err(e) => {
                warn!(from = from_id, to = to_id, code = %e.code, "support label fallback");
                short_name.to_string()
            }
        }
    }

    // ========== Calculator ==========

    /// Fresh calculator using the configured angle mode and precision
    pub fn calculator(&self) -> Calculator {
        Calculator::new()
            .with_angle_mode(self.settings.angle_mode)
            .with_precision(self.settings.precision)
    }

    /// Evaluate a typed expression and format the result
    pub fn calculate(&self, expression: &str) -> Result<String, HubError> {
        let value = self.calculator().with_expression(expression)?.evaluate()?;
        Ok(self.format_number(&value))
    }

    /// Format with the configured scale, output format and symbols
    pub fn format_number(&self, value: &Number) -> String {
        let text = numberhub_core::format(value, self.settings.scale, self.settings.output_format);
        self.settings.formatter_symbols.apply(&text)
    }

    /// Apply the configured symbols to an expression being typed
    pub fn format_expression(&self, expression: &str) -> String {
        self.settings.formatter_symbols.apply(expression)
    }

    // ========== Epoch ==========

    /// `HHmmssddMMyyyy` digits (trailing digits may be missing) to Unix seconds
    pub fn date_to_unix(&self, digits: &str) -> Result<i64, HubError> {
        epoch::date_to_unix(digits).map_err(|e| HubError::from(e).with_input(digits))
    }

    /// Unix seconds to `HHmmssddMMyyyy` digits
    pub fn unix_to_date(&self, secs: i64) -> Result<String, HubError> {
        epoch::unix_to_date(secs).map_err(|e| HubError::from(e).with_input(secs.to_string()))
    }
}

impl Default for NumberHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn request(from: &str, to: &str, input: &str) -> ConversionRequest {
        ConversionRequest::new(from, to, input)
    }

    fn hub_with_rates() -> NumberHub {
        let hub = NumberHub::new();
        hub.update_rates(
            RateSnapshot::from_json(r#"{"base": "usd", "rates": {"eur": "0.92", "gbp": 0.8}}"#).unwrap(),
        );
        hub
    }

    #[test]
    fn test_convert_kilometer_to_meter() {
        let hub = NumberHub::new();
        let result = hub.convert(&request("kilometer", "meter", "1")).unwrap();
        assert_eq!(result.as_number(), Some(&Number::from_i64(1000)));
        assert_eq!(hub.convert_formatted(&request("kilometer", "meter", "1")).unwrap(), "1 000");
    }

    #[test]
    fn test_convert_pascal_to_bar() {
        let hub = NumberHub::new();
        assert_eq!(hub.convert_formatted(&request("pascal", "bar", "100")).unwrap(), "0.001");
    }

    #[test]
    fn test_convert_respects_settings() {
        let hub = NumberHub::new().with_settings(
            Settings::default()
                .with_scale(2)
                .with_formatter_symbols(FormatterSymbols::period()),
        );
        assert_eq!(hub.convert_formatted(&request("mile", "meter", "1.5")).unwrap(), "2.414,02");

        let hub = NumberHub::new()
            .with_settings(Settings::default().with_output_format(OutputFormat::ForceEngineering));
        assert_eq!(hub.convert_formatted(&request("kilometer", "millimeter", "12")).unwrap(), "1.2E+7");
    }

    #[test]
    fn test_error_codes() {
        let hub = NumberHub::new();
        let err = hub.convert(&request("meter", "second", "1")).unwrap_err();
        assert_eq!(err.code, codes::INCOMPATIBLE_UNITS);

        let err = hub.convert(&request("hexadecimal", "decimal", "G")).unwrap_err();
        assert_eq!(err.code, codes::INVALID_DIGIT);

        let err = hub.convert(&request("usd", "eur", "1")).unwrap_err();
        assert_eq!(err.code, codes::RATES_NOT_READY);

        let err = hub.convert(&request("parsec", "meter", "")).unwrap_err();
        assert_eq!(err.code, codes::PARSE_ERROR);

        let err = hub.convert(&request("cubit", "meter", "1")).unwrap_err();
        assert_eq!(err.code, codes::NOT_FOUND);
    }

    #[test]
    fn test_number_base_output() {
        let hub = NumberHub::new();
        assert_eq!(hub.convert_formatted(&request("hexadecimal", "decimal", "FF")).unwrap(), "255");
        assert_eq!(hub.convert_formatted(&request("decimal", "binary", "10")).unwrap(), "1010");
    }

    #[test]
    fn test_currency_after_rates_arrive() {
        let rates = Arc::new(CurrencyRates::new());
        let hub = NumberHub::new().with_rates(Arc::clone(&rates));
        assert!(hub.convert(&request("usd", "eur", "10")).is_err());

        let mut table = HashMap::new();
        table.insert("eur".to_string(), Number::from_str("0.5").unwrap());
        rates.update(RateSnapshot::new("usd", table));
        assert_eq!(hub.convert_formatted(&request("eur", "usd", "10")).unwrap(), "20");

        let hub = hub_with_rates();
        assert_eq!(hub.convert_formatted(&request("eur", "gbp", "9.2")).unwrap(), "8");
    }

    #[test]
    fn test_zero_rate_is_not_used() {
        let hub = NumberHub::new();
        let mut table = HashMap::new();
        table.insert("eur".to_string(), Number::from_i64(0));
        hub.update_rates(RateSnapshot::new("usd", table));

        assert_eq!(hub.convert(&request("usd", "eur", "100")).unwrap_err().code, codes::RATES_NOT_READY);
        assert_eq!(hub.convert(&request("eur", "usd", "100")).unwrap_err().code, codes::RATES_NOT_READY);
    }

    #[test]
    fn test_out_of_range_input() {
        let hub = NumberHub::new();
        let err = hub.convert(&request("kilometer", "meter", "1e9223372036854775807")).unwrap_err();
        assert_eq!(err.code, codes::OVERFLOW);
        assert_eq!(hub.calculate("((10^2147483647)^2147483647)^3").unwrap_err().code, codes::MATH_ERROR);
    }

    #[test]
    fn test_scientific_output_keeps_exponent_digits() {
        let hub = NumberHub::new().with_settings(
            Settings::default()
                .with_output_format(OutputFormat::AllowEngineering)
                .with_formatter_symbols(FormatterSymbols::period()),
        );
        assert_eq!(hub.calculate("10^1234").unwrap(), "1E+1234");
        assert_eq!(hub.convert_formatted(&request("kilometer", "meter", "1.5e1000")).unwrap(), "1,5E+1003");
    }

    #[test]
    fn test_support_label() {
        let hub = NumberHub::new();
        assert_eq!(hub.support_label("kilometer", "meter", "2"), "2 000 m");
        assert_eq!(hub.support_label("kilometer", "meter", ""), "m");
        assert_eq!(hub.support_label("kilometer", "second", "2"), "s");
        assert_eq!(hub.support_label("kilometer", "meter", "abc"), "m");
        assert_eq!(hub.support_label("binary", "hexadecimal", "1111"), "F base16");
        assert_eq!(hub.support_label("usd", "eur", "1"), "EUR");

        let hub = hub_with_rates();
        assert_eq!(hub.support_label("usd", "eur", "100"), "92 EUR");
    }

    #[test]
    fn test_calculator_uses_settings() {
        let hub = NumberHub::new().with_settings(Settings::default().with_angle_mode(AngleMode::Deg));
        let mut calc = hub.calculator();
        assert_eq!(calc.angle_mode(), AngleMode::Deg);
        for s in ["s", "i"] {
            assert!(calc.add_symbol(s).is_err());
        }
        for s in ["sin(", "3", "0", ")", "×", "4"] {
            calc.add_symbol(s).unwrap();
        }
        assert_eq!(hub.format_number(&calc.evaluate().unwrap()), "2");
    }

    #[test]
    fn test_calculate() {
        let hub = NumberHub::new();
        assert_eq!(hub.calculate("2+2").unwrap(), "4");
        assert_eq!(hub.calculate("1000×1000").unwrap(), "1 000 000");
        assert_eq!(hub.calculate("2÷3").unwrap(), "0.667");
        assert_eq!(hub.calculate("2+").unwrap_err().code, codes::PARSE_ERROR);
        assert_eq!(hub.calculate("1÷0").unwrap_err().code, codes::MATH_ERROR);
        assert_eq!(hub.calculate("2$").unwrap_err().code, codes::PARSE_ERROR);
        let deep = format!("{}1{}", "(".repeat(600), ")".repeat(600));
        assert_eq!(hub.calculate(&deep).unwrap_err().code, codes::PARSE_ERROR);
    }

    #[test]
    fn test_format_expression() {
        let hub = NumberHub::new().with_settings(
            Settings::default().with_formatter_symbols(FormatterSymbols::comma()),
        );
        assert_eq!(hub.format_expression("12345+0.5×1000"), "12,345+0.5×1,000");
    }

    #[test]
    fn test_epoch() {
        let hub = NumberHub::new();
        assert_eq!(hub.date_to_unix("00000001011970").unwrap(), 0);
        assert_eq!(hub.unix_to_date(0).unwrap(), "00000001011970");

        let err = hub.date_to_unix("00000032011970").unwrap_err();
        assert_eq!(err.code, codes::INVALID_DATE);
        assert_eq!(err.input.as_deref(), Some("00000032011970"));

        assert_eq!(hub.date_to_unix("99000001011970").unwrap_err().code, codes::INVALID_TIME);
        assert_eq!(hub.date_to_unix("x").unwrap_err().code, codes::DATE_PARSE_ERROR);
    }

    #[test]
    fn test_registry_access() {
        let hub = NumberHub::new();
        let groups: Vec<_> = hub.registry().groups().collect();
        assert_eq!(groups.first(), Some(&UnitGroup::Length));
        assert!(!hub.registry().search("byte", Some(UnitGroup::DataStorage)).is_empty());
    }
}
