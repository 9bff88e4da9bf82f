//! Currency rates
//!
//! Rates are published as immutable snapshots. A conversion clones the
//! current `Arc` once and reads only from it, so an update racing with a
//! conversion can never mix rates from two different feeds.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use serde::Deserialize;
use numberhub_core::{Number, NumberError};
use tracing::{debug, warn};
use crate::ConversionError;

/// One consistent set of rates, expressed as units of each currency per one
/// unit of `base`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateSnapshot {
    ready: bool,
    base: Option<String>,
    rates: HashMap<String, Number>,
}

/// Wire shape of the rate feed; rates may be strings or JSON numbers
#[derive(Deserialize)]
struct RatePayload {
    base: String,
    rates: HashMap<String, serde_json::Value>,
}

impl RateSnapshot {
    /// Snapshot used before the first successful fetch
    pub fn not_ready() -> Self {
        Self::default()
    }

    /// Snapshot of `rates` against `base`. Zero and negative rates are
    /// dropped, so those currencies report `RatesNotReady`.
    pub fn new(base: impl Into<String>, rates: HashMap<String, Number>) -> Self {
        let base = base.into().to_lowercase();
        let mut rates: HashMap<String, Number> = rates
            .into_iter()
            .filter(|(code, rate)| {
                let usable = !rate.is_zero() && !rate.is_negative();
                if !usable {
                    warn!(currency = %code, rate = %rate, "dropping non-positive rate");
                }
                usable
            })
            .map(|(code, rate)| (code.to_lowercase(), rate))
            .collect();
        rates.entry(base.clone()).or_insert_with(|| Number::from_i64(1));
        Self { ready: true, base: Some(base), rates }
    }

    /// Parse a `{"base": "usd", "rates": {"eur": "0.92", ...}}` payload
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        let payload: RatePayload = serde_json::from_str(json)
            .map_err(|e| NumberError::ParseError(e.to_string()))?;

        let mut rates = HashMap::with_capacity(payload.rates.len());
        for (code, raw) in payload.rates {
            let text = match raw {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                other => {
                    return Err(NumberError::ParseError(format!("rate for {}: {}", code, other)).into())
                }
            };
            rates.insert(code, Number::from_str(&text)?);
        }

        Ok(Self::new(payload.base, rates))
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Lowercase base currency code, `None` before the first feed
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Number of currencies with a usable rate, base included
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate of a currency against the base, `RatesNotReady` when absent
    pub fn rate(&self, id: &str) -> Result<&Number, ConversionError> {
        if !self.ready {
            return Err(ConversionError::RatesNotReady);
        }
        self.rates.get(id).ok_or(ConversionError::RatesNotReady)
    }
}

/// Shared holder of the current snapshot
#[derive(Debug)]
pub struct CurrencyRates {
    current: RwLock<Arc<RateSnapshot>>,
}

impl CurrencyRates {
    pub fn new() -> Self {
        Self { current: RwLock::new(Arc::new(RateSnapshot::not_ready())) }
    }

    pub fn with_snapshot(snapshot: RateSnapshot) -> Self {
        Self { current: RwLock::new(Arc::new(snapshot)) }
    }

    /// Replace the whole snapshot
    pub fn update(&self, snapshot: RateSnapshot) {
        debug!(base = ?snapshot.base(), count = snapshot.len(), "currency rates updated");
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(snapshot);
    }

    /// Current snapshot; callers keep it for the whole conversion
    pub fn snapshot(&self) -> Arc<RateSnapshot> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn mark_not_ready(&self) {
        self.update(RateSnapshot::not_ready());
    }

    pub fn is_ready(&self) -> bool {
        self.snapshot().is_ready()
    }
}

impl Default for CurrencyRates {
    fn default() -> Self {
        Self::new()
    }
}
