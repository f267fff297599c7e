//! 70/30 split of a USD amount across two crypto currencies

use crate::core::error::EvaluatorError;
use crate::core::rates::RateProvider;
use std::fmt::Display;
use tracing::{debug, instrument};

const SEVENTY: f64 = 0.7;
const THIRTY: f64 = 0.3;

/// One side of the split: the USD share and what it buys of the asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitShare {
    pub usd: f64,
    pub converted: f64,
}

impl SplitShare {
    fn new(usd: f64, rate: f64) -> Self {
        Self {
            usd,
            converted: rate * usd,
        }
    }

    /// USD share truncated toward zero.
    pub fn whole_usd(&self) -> i64 {
        self.usd as i64
    }
}

impl Display for SplitShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=>{:.4}", self.whole_usd(), self.converted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitResult {
    pub seventy: SplitShare,
    pub thirty: SplitShare,
}

impl SplitResult {
    /// Seventy line first, thirty line second.
    pub fn lines(&self) -> (String, String) {
        (self.seventy.to_string(), self.thirty.to_string())
    }
}

pub struct SplitCalculator<'a> {
    provider: &'a dyn RateProvider,
}

impl<'a> SplitCalculator<'a> {
    pub fn new(provider: &'a dyn RateProvider) -> Self {
        Self { provider }
    }

    #[instrument(name = "SplitCalculate", skip(self))]
    pub async fn calculate(
        &self,
        usd_amount: &str,
        symbol_seventy: &str,
        symbol_thirty: &str,
    ) -> Result<SplitResult, EvaluatorError> {
        let amount: f64 = usd_amount
            .parse()
            .map_err(|_| EvaluatorError::InvalidAmount {
                input: usd_amount.to_string(),
            })?;

        let snapshot = self.provider.fetch_snapshot().await?;
        let rate_seventy = snapshot.lookup_rate(symbol_seventy)?;
        let rate_thirty = snapshot.lookup_rate(symbol_thirty)?;
        debug!(rate_seventy, rate_thirty, "Resolved rates");

        Ok(SplitResult {
            seventy: SplitShare::new(SEVENTY * amount, rate_seventy),
            thirty: SplitShare::new(THIRTY * amount, rate_thirty),
        })
    }
}

/// Fetches rates and returns the two formatted split lines.
pub async fn compute_split(
    provider: &dyn RateProvider,
    usd_amount: &str,
    symbol_seventy: &str,
    symbol_thirty: &str,
) -> Result<(String, String), EvaluatorError> {
    SplitCalculator::new(provider)
        .calculate(usd_amount, symbol_seventy, symbol_thirty)
        .await
        .map(|result| result.lines())
}
