use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

use super::transport::{HttpTransport, ReqwestTransport};
use crate::core::config::ProviderConfig;
use crate::core::error::EvaluatorError;
use crate::core::rates::{RateProvider, RateSnapshot};

#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    data: Option<ExchangeRateData>,
}

#[derive(Debug, Deserialize)]
struct ExchangeRateData {
    currency: Option<String>,
    rates: Option<HashMap<String, String>>,
}

impl ExchangeRateResponse {
    fn into_snapshot(self) -> Option<RateSnapshot> {
        let data = self.data?;
        let currency = data.currency.filter(|c| !c.is_empty())?;
        let rates = data.rates.filter(|r| !r.is_empty())?;
        Some(RateSnapshot::new(currency, rates))
    }
}

/// Quote service returning `{"data": {"currency": .., "rates": {..}}}` for a
/// single base currency.
pub struct CoinbaseProvider {
    endpoint: String,
    transport: Box<dyn HttpTransport>,
}

impl CoinbaseProvider {
    pub fn new(endpoint: &str, transport: Box<dyn HttpTransport>) -> Self {
        CoinbaseProvider {
            endpoint: endpoint.to_string(),
            transport,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))
            .context("Failed to create HTTP transport")?;
        Ok(Self::new(&config.base_url, Box::new(transport)))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RateProvider for CoinbaseProvider {
    #[instrument(name = "CoinbaseRateFetch", skip(self))]
    async fn fetch_snapshot(&self) -> Result<RateSnapshot, EvaluatorError> {
        debug!("Requesting exchange rates from {}", self.endpoint);

        let response = self.transport.get(&self.endpoint).await.map_err(|e| {
            debug!(error = %e, "Exchange rate request failed");
            EvaluatorError::Fetch
        })?;

        if response.status != 200 {
            debug!(status = response.status, "Unexpected status from quote service");
            return Err(EvaluatorError::Fetch);
        }

        let body = response.body.map_err(|e| {
            debug!(error = %e, "Failed to read exchange rate response");
            EvaluatorError::ResponseBody
        })?;

        let data: ExchangeRateResponse = serde_json::from_slice(&body).map_err(|e| {
            debug!(
                error = ?e,
                response = %String::from_utf8_lossy(&body),
                "Failed to parse exchange rate response"
            );
            EvaluatorError::Parse
        })?;

        let snapshot = data.into_snapshot().ok_or(EvaluatorError::MissingData)?;
        debug!(
            currency = snapshot.base_currency(),
            count = snapshot.rates().len(),
            "Received exchange rates"
        );
        Ok(snapshot)
    }
}
