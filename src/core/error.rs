//! Error kinds surfaced by rate acquisition and split computation

use thiserror::Error;

/// Every failure is reported as-is to the caller. Unit variants are fixed
/// sentinels compared by kind; struct variants carry the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluatorError {
    #[error("invalid amount specified: {input}")]
    InvalidArgument { input: String },

    #[error("failed to get exchange rate data from the quote service")]
    Fetch,

    #[error("invalid response from server")]
    ResponseBody,

    #[error("failed to parse exchange rate data from the quote service")]
    Parse,

    #[error("incorrect exchange rates from the quote service")]
    MissingData,

    #[error("invalid exchange rate service configuration")]
    Configuration,

    #[error("exchange rate not found for crypto currency {symbol}")]
    RateNotFound { symbol: String },

    #[error("invalid rate for crypto currency {symbol}")]
    InvalidRate { symbol: String },

    #[error("invalid amount {input}")]
    InvalidAmount { input: String },
}
