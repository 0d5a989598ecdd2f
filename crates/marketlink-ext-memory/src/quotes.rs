//! Quotes and relinkable handles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use marketlink_traits::{EngineObject, Quote, RelinkableHandle};

/// A quote holding a single settable value.
#[derive(Debug, Default)]
pub struct SimpleQuote {
    value: RwLock<Option<f64>>,
}

impl SimpleQuote {
    /// Creates a quote with no value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a quote with an initial value.
    pub fn with_value(value: f64) -> Self {
        Self {
            value: RwLock::new(Some(value)),
        }
    }
}

impl Quote for SimpleQuote {
    fn value(&self) -> Option<f64> {
        *self.value.read()
    }

    fn set_value(&self, value: f64) {
        *self.value.write() = Some(value);
    }
}

impl EngineObject for SimpleQuote {
    fn type_name(&self) -> &'static str {
        "SimpleQuote"
    }

    fn as_quote(self: Arc<Self>) -> Option<Arc<dyn Quote>> {
        Some(self)
    }
}

/// A handle to a quote that can be swapped for another one.
///
/// Instruments keep the handle; relinking replaces what they read through it
/// without touching the instrument. The quote that was linked before is left
/// as is, so other holders of it see no change.
#[derive(Debug, Default)]
pub struct RelinkableQuoteHandle {
    target: RwLock<Option<Arc<SimpleQuote>>>,
    relinks: AtomicUsize,
}

impl RelinkableQuoteHandle {
    /// Creates an unlinked handle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a handle already linked to `quote`.
    pub fn linked(quote: Arc<SimpleQuote>) -> Self {
        Self {
            target: RwLock::new(Some(quote)),
            relinks: AtomicUsize::new(0),
        }
    }

    /// Points the handle at an existing quote.
    pub fn link_to_quote(&self, quote: Arc<SimpleQuote>) {
        *self.target.write() = Some(quote);
        self.relinks.fetch_add(1, Ordering::SeqCst);
    }

    /// The currently linked quote.
    pub fn current(&self) -> Option<Arc<SimpleQuote>> {
        self.target.read().clone()
    }

    /// Value of the currently linked quote.
    pub fn value(&self) -> Option<f64> {
        self.target.read().as_ref().and_then(|q| q.value())
    }

    /// Number of relinks since creation.
    pub fn relink_count(&self) -> usize {
        self.relinks.load(Ordering::SeqCst)
    }
}

impl RelinkableHandle for RelinkableQuoteHandle {
    fn link_to(&self, value: f64) {
        self.link_to_quote(Arc::new(SimpleQuote::with_value(value)));
    }

    fn is_empty(&self) -> bool {
        self.target.read().is_none()
    }
}

impl EngineObject for RelinkableQuoteHandle {
    fn type_name(&self) -> &'static str {
        "RelinkableQuoteHandle"
    }

    fn as_relinkable(self: Arc<Self>) -> Option<Arc<dyn RelinkableHandle>> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_quote() {
        let quote = SimpleQuote::empty();
        assert_eq!(quote.value(), None);
        quote.set_value(0.035);
        assert_eq!(quote.value(), Some(0.035));
        assert_eq!(SimpleQuote::with_value(7.0).value(), Some(7.0));
    }

    #[test]
    fn test_relink_leaves_previous_target_untouched() {
        let original = Arc::new(SimpleQuote::with_value(0.02));
        let handle = RelinkableQuoteHandle::linked(original.clone());
        assert!(!handle.is_empty());
        assert_eq!(handle.value(), Some(0.02));

        handle.link_to(0.05);
        assert_eq!(handle.value(), Some(0.05));
        assert_eq!(original.value(), Some(0.02));
        assert_eq!(handle.relink_count(), 1);
    }

    #[test]
    fn test_empty_handle() {
        let handle = RelinkableQuoteHandle::empty();
        assert!(handle.is_empty());
        assert_eq!(handle.value(), None);
        assert!(handle.current().is_none());
    }

    #[test]
    fn test_capabilities() {
        let quote: Arc<dyn EngineObject> = Arc::new(SimpleQuote::empty());
        assert!(quote.clone().as_relinkable().is_none());
        assert!(quote.as_quote().is_some());

        let handle: Arc<dyn EngineObject> = Arc::new(RelinkableQuoteHandle::empty());
        assert!(handle.clone().as_quote().is_none());
        assert!(handle.as_relinkable().is_some());
    }
}
