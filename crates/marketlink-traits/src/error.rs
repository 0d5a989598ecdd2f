//! Errors raised by valuation engines.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failure inside the external valuation engine.
///
/// The adapter never translates these; they reach the caller as raised.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// The global evaluation date has never been set.
    #[error("evaluation date is not set")]
    EvaluationDateUnset,

    /// A quote required for the calculation has no value.
    #[error("quote '{0}' has no value")]
    UnsetQuote(String),

    /// A relinkable handle required for the calculation is not linked.
    #[error("handle '{0}' is empty")]
    EmptyHandle(String),

    /// Other required market data is missing.
    #[error("missing market data: {0}")]
    MissingMarketData(String),

    /// Numerical failure during valuation.
    #[error("calculation error: {0}")]
    Calculation(String),
}
