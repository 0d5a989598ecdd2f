//! Error types for the adapter.

use marketlink_traits::EngineError;
use thiserror::Error;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors raised by snapshots and instrument adapters.
///
/// Configuration problems surface eagerly when a snapshot is built. Engine
/// failures surface when pricing and are passed through untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdapterError {
    /// Malformed configuration or an unrecognized date.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// Description of the problem.
        reason: String,
    },

    /// An engine object offered for binding is neither a quote nor a
    /// relinkable handle.
    #[error("Unsupported engine object for key '{key}': {type_name}")]
    UnsupportedObject {
        /// The binding key.
        key: String,
        /// The engine type of the rejected object.
        type_name: String,
    },

    /// The same key was bound twice.
    #[error("Duplicate binding for key '{key}'")]
    DuplicateBinding {
        /// The binding key.
        key: String,
    },

    /// The snapshot has no valuation date to resolve.
    #[error("Snapshot has no valuation date")]
    MissingDate,

    /// Failure inside the valuation engine.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl AdapterError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported-object error.
    #[must_use]
    pub fn unsupported_object(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedObject {
            key: key.into(),
            type_name: type_name.into(),
        }
    }

    /// True for errors raised while building a snapshot.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::UnsupportedObject { .. } | Self::DuplicateBinding { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdapterError::unsupported_object("curve", "YieldTermStructure");
        assert_eq!(
            err.to_string(),
            "Unsupported engine object for key 'curve': YieldTermStructure"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_date_is_not_configuration() {
        let err = AdapterError::MissingDate;
        assert_eq!(err.to_string(), "Snapshot has no valuation date");
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let err = AdapterError::from(EngineError::UnsetQuote("spot".into()));
        assert_eq!(err.to_string(), "quote 'spot' has no value");
        assert!(!err.is_configuration());
        assert_eq!(err, AdapterError::Engine(EngineError::UnsetQuote("spot".into())));
    }
}
