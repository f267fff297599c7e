//! Core business logic abstractions

pub mod config;
pub mod error;
pub mod log;
pub mod rates;
pub mod split;

// Re-export main types for cleaner imports
pub use error::EvaluatorError;
pub use rates::{RateProvider, RateSnapshot};
pub use split::{SplitCalculator, SplitResult, SplitShare, compute_split};
