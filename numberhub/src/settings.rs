//! User facing settings
//!
//! Every field has a default, so a partial JSON document is enough:
//! `{"scale": 5, "formatter_symbols": {"grouping": ",", "fractional": "."}}`.

use numberhub_calc::AngleMode;
use numberhub_core::{FormatterSymbols, HubError, OutputFormat, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};

/// Fraction digits shown by default
pub const DEFAULT_SCALE: u32 = 3;

/// Largest accepted `scale`
pub const MAX_SCALE: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Digits after the decimal point in formatted results
    pub scale: u32,
    pub output_format: OutputFormat,
    pub formatter_symbols: FormatterSymbols,
    pub angle_mode: AngleMode,
    /// Digits for transcendental functions in the calculator
    pub precision: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            output_format: OutputFormat::default(),
            formatter_symbols: FormatterSymbols::default(),
            angle_mode: AngleMode::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, HubError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| HubError::parse_error(format!("invalid settings: {}", e)))?;
        settings.validated()
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    fn validated(self) -> Result<Self, HubError> {
        if self.scale > MAX_SCALE {
            return Err(HubError::parse_error(format!("scale {} exceeds {}", self.scale, MAX_SCALE))
                .with_suggestion(format!("Use a scale between 0 and {}", MAX_SCALE)));
        }
        if self.precision == 0 {
            return Err(HubError::parse_error("precision must be positive"));
        }
        Ok(self)
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.min(MAX_SCALE);
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_formatter_symbols(mut self, symbols: FormatterSymbols) -> Self {
        self.formatter_symbols = symbols;
        self
    }

    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numberhub_core::codes;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scale, 3);
        assert_eq!(settings.output_format, OutputFormat::Plain);
        assert_eq!(settings.formatter_symbols, FormatterSymbols::spaces());
        assert_eq!(settings.angle_mode, AngleMode::Rad);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{"scale": 5, "angle_mode": "deg"}"#).unwrap();
        assert_eq!(settings.scale, 5);
        assert_eq!(settings.angle_mode, AngleMode::Deg);
        assert_eq!(settings.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_full_json_round_trip() {
        let settings = Settings::default()
            .with_scale(8)
            .with_output_format(OutputFormat::AllowEngineering)
            .with_formatter_symbols(FormatterSymbols::period());
        assert_eq!(Settings::from_json(&settings.to_json()).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json() {
        let err = Settings::from_json(r#"{"output_format": "hex"}"#).unwrap_err();
        assert_eq!(err.code, codes::PARSE_ERROR);
        assert!(Settings::from_json(r#"{"scale": 5000}"#).is_err());
        assert!(Settings::from_json(r#"{"precision": 0}"#).is_err());
    }
}
