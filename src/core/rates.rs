//! Exchange rate snapshots and the provider abstraction

use crate::core::error::EvaluatorError;
use async_trait::async_trait;
use std::collections::HashMap;

/// One fetched set of USD rates. Rate values are kept as the text the
/// quote service sent and parsed on lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSnapshot {
    base_currency: String,
    rates: HashMap<String, String>,
}

impl RateSnapshot {
    pub fn new(base_currency: impl Into<String>, rates: HashMap<String, String>) -> Self {
        Self {
            base_currency: base_currency.into(),
            rates,
        }
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub fn rates(&self) -> &HashMap<String, String> {
        &self.rates
    }

    /// A snapshot is usable only with a base currency and at least one rate.
    pub fn is_valid(&self) -> bool {
        !self.base_currency.is_empty() && !self.rates.is_empty()
    }

    /// Returns the units of `symbol` bought by one unit of the base currency.
    ///
    /// `f64::MAX` is rejected along with anything unparsable or non-finite;
    /// upstream uses it to mark an overflowed quote.
    pub fn lookup_rate(&self, symbol: &str) -> Result<f64, EvaluatorError> {
        if !self.is_valid() {
            return Err(EvaluatorError::Configuration);
        }

        let text = self
            .rates
            .get(symbol)
            .ok_or_else(|| EvaluatorError::RateNotFound {
                symbol: symbol.to_string(),
            })?;

        match text.parse::<f64>() {
            Ok(rate) if rate.is_finite() && rate != f64::MAX => Ok(rate),
            _ => Err(EvaluatorError::InvalidRate {
                symbol: symbol.to_string(),
            }),
        }
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches a fresh snapshot. Every call goes to the quote service.
    async fn fetch_snapshot(&self) -> Result<RateSnapshot, EvaluatorError>;
}
