//! NumberHub Core - Fundamental types
//!
//! This crate provides the core types used throughout NumberHub:
//! - `Number`: Arbitrary precision decimal numbers
//! - `format`: Rounding, output formats and locale symbols
//! - `epoch`: Date <-> Unix seconds conversion
//! - `HubError`: Structured errors for the call boundary

mod number;
mod error;
pub mod format;
pub mod epoch;

pub use number::{Number, NumberError, DEFAULT_PRECISION, MAX_EXPONENT, WORK_PRECISION};
pub use error::{HubError, Severity, codes};
pub use format::{format, FormatterSymbols, OutputFormat};
pub use epoch::{EpochDate, DateTimeError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, HubError, Severity, OutputFormat, FormatterSymbols};
    pub use crate::error::codes;
}
