//! Engine-state capabilities.
//!
//! These traits cover the mutable engine state the adapter touches:
//! - [`EvaluationSettings`]: the single global "as-of" date
//! - [`Quote`]: a settable numeric market observable
//! - [`RelinkableHandle`]: an indirection that can be pointed at a new value
//! - [`EngineObject`]: capability probe used to classify caller-supplied objects
//!
//! Implementations hold their state behind interior mutability; every method
//! takes `&self` because the same object is observed by many dependents.

use std::sync::Arc;

use marketlink_core::Date;

/// The engine's global evaluation-date setting.
pub trait EvaluationSettings: Send + Sync {
    /// Currently active evaluation date, `None` if never set.
    fn evaluation_date(&self) -> Option<Date>;

    /// Replaces the evaluation date. Every write may invalidate cached
    /// engine results, so callers should avoid redundant writes.
    fn set_evaluation_date(&self, date: Date);
}

/// A mutable numeric market observable (spot, rate, vol point).
pub trait Quote: Send + Sync {
    /// Current value, `None` if never set.
    fn value(&self) -> Option<f64>;

    /// Sets a new value, notifying dependents.
    fn set_value(&self, value: f64);
}

/// An indirection dependents hold onto while its target is swapped.
pub trait RelinkableHandle: Send + Sync {
    /// Points the handle at a new underlying value.
    fn link_to(&self, value: f64);

    /// True if the handle has never been linked.
    fn is_empty(&self) -> bool;
}

/// Any engine object a caller may offer to a market snapshot.
///
/// Classification asks each capability in turn. An object answering
/// `None` to both is not usable as a market binding.
pub trait EngineObject: Send + Sync {
    /// Engine type name, used in error messages.
    fn type_name(&self) -> &'static str;

    /// This object as a settable quote, if it is one.
    fn as_quote(self: Arc<Self>) -> Option<Arc<dyn Quote>> {
        None
    }

    /// This object as a relinkable handle, if it is one.
    fn as_relinkable(self: Arc<Self>) -> Option<Arc<dyn RelinkableHandle>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::RwLock;

    struct Cell(RwLock<Option<f64>>);

    impl Quote for Cell {
        fn value(&self) -> Option<f64> {
            *self.0.read()
        }

        fn set_value(&self, value: f64) {
            *self.0.write() = Some(value);
        }
    }

    impl EngineObject for Cell {
        fn type_name(&self) -> &'static str {
            "Cell"
        }

        fn as_quote(self: Arc<Self>) -> Option<Arc<dyn Quote>> {
            Some(self)
        }
    }

    struct Opaque;

    impl EngineObject for Opaque {
        fn type_name(&self) -> &'static str {
            "Opaque"
        }
    }

    #[test]
    fn test_capability_probe() {
        let cell: Arc<dyn EngineObject> = Arc::new(Cell(RwLock::new(None)));
        assert!(cell.clone().as_relinkable().is_none());
        let quote = cell.as_quote().unwrap();
        quote.set_value(1.25);
        assert_eq!(quote.value(), Some(1.25));

        let opaque: Arc<dyn EngineObject> = Arc::new(Opaque);
        assert!(opaque.clone().as_quote().is_none());
        assert!(opaque.as_relinkable().is_none());
    }
}
