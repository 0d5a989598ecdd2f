//! Classification of engine objects bound to snapshot keys.

use std::fmt;
use std::sync::Arc;

use marketlink_traits::{EngineObject, Quote, RelinkableHandle, Shared};

use crate::error::{AdapterError, AdapterResult};

/// How a bound engine object receives snapshot values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Value is pushed with `set_value`.
    Quote,
    /// Handle is relinked to the value.
    RelinkableHandle,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::Quote => write!(f, "quote"),
            BindingKind::RelinkableHandle => write!(f, "relinkable handle"),
        }
    }
}

/// An engine object classified once, at snapshot construction.
#[derive(Debug, Clone)]
pub enum EngineBinding {
    /// A settable quote.
    Quote(Shared<dyn Quote>),
    /// A relinkable handle.
    RelinkableHandle(Shared<dyn RelinkableHandle>),
}

impl EngineBinding {
    /// Classifies `object` by capability.
    ///
    /// Quotes are tried first; an object exposing both capabilities binds as a
    /// quote.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::UnsupportedObject` naming `key` and the object's
    /// type when it has neither capability.
    pub fn classify(key: &str, object: Arc<dyn EngineObject>) -> AdapterResult<Self> {
        let type_name = object.type_name();
        if let Some(quote) = Arc::clone(&object).as_quote() {
            return Ok(EngineBinding::Quote(Shared::from_arc(quote)));
        }
        if let Some(handle) = object.as_relinkable() {
            return Ok(EngineBinding::RelinkableHandle(Shared::from_arc(handle)));
        }
        Err(AdapterError::unsupported_object(key, type_name))
    }

    /// The kind of this binding.
    pub fn kind(&self) -> BindingKind {
        match self {
            EngineBinding::Quote(_) => BindingKind::Quote,
            EngineBinding::RelinkableHandle(_) => BindingKind::RelinkableHandle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketlink_ext_memory::{RelinkableQuoteHandle, SimpleQuote};

    struct Calendar;

    impl EngineObject for Calendar {
        fn type_name(&self) -> &'static str {
            "Calendar"
        }
    }

    #[test]
    fn test_classify_quote() {
        let quote = Arc::new(SimpleQuote::empty());
        let binding = EngineBinding::classify("spot", quote.clone()).unwrap();
        assert_eq!(binding.kind(), BindingKind::Quote);

        let EngineBinding::Quote(bound) = binding else {
            panic!("expected a quote binding");
        };
        bound.set_value(3.0);
        assert_eq!(quote.value(), Some(3.0));
    }

    #[test]
    fn test_classify_relinkable() {
        let handle = Arc::new(RelinkableQuoteHandle::empty());
        let binding = EngineBinding::classify("rate", handle).unwrap();
        assert_eq!(binding.kind(), BindingKind::RelinkableHandle);
        assert_eq!(binding.kind().to_string(), "relinkable handle");
    }

    #[test]
    fn test_classify_rejects_unknown_objects() {
        let err = EngineBinding::classify("cal", Arc::new(Calendar)).unwrap_err();
        assert_eq!(err, AdapterError::unsupported_object("cal", "Calendar"));
    }
}
