pub mod core;
pub mod providers;

pub use crate::core::config::AppConfig;
pub use crate::core::error::EvaluatorError;

use crate::core::split::compute_split;
use crate::providers::CoinbaseProvider;
use tracing::{debug, info};

/// Fetches live rates from the configured quote service and returns the
/// seventy and thirty split lines for `usd_amount`.
pub async fn run(
    usd_amount: &str,
    currency_seventy: &str,
    currency_thirty: &str,
    config: &AppConfig,
) -> Result<(String, String), EvaluatorError> {
    info!("Crypto evaluator starting...");
    debug!("Loaded config: {config:#?}");

    let provider = CoinbaseProvider::from_config(&config.provider).map_err(|e| {
        debug!(error = ?e, "Failed to create rate provider");
        EvaluatorError::Fetch
    })?;

    compute_split(&provider, usd_amount, currency_seventy, currency_thirty).await
}
