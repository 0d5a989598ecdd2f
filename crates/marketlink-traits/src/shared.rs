//! Explicit aliasing of engine-owned objects.
//!
//! Engine quotes, handles and instruments are mutable objects owned by the
//! engine and observed by everything that priced off them. They cannot be
//! deep-copied. A [`Shared`] field says so in the type: cloning the wrapper
//! yields another reference to the same object, never a copy.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A reference to an engine object that clones by aliasing.
pub struct Shared<T: ?Sized>(Arc<T>);

impl<T> Shared<T> {
    /// Wraps a freshly created engine object.
    pub fn new(value: T) -> Self {
        Shared(Arc::new(value))
    }
}

impl<T: ?Sized> Shared<T> {
    /// Wraps an existing reference (e.g. an `Arc<dyn Quote>`).
    pub fn from_arc(inner: Arc<T>) -> Self {
        Shared(inner)
    }

    /// Borrows the underlying `Arc`.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }

    /// True if both wrappers refer to the very same engine object.
    ///
    /// Compares data addresses only, so two trait objects built from the same
    /// allocation compare equal regardless of vtable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::as_ptr(&self.0).cast::<()>() == Arc::as_ptr(&other.0).cast::<()>()
    }

    /// Number of live aliases of the object.
    pub fn alias_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> From<Arc<T>> for Shared<T> {
    fn from(inner: Arc<T>) -> Self {
        Shared(inner)
    }
}

impl<T: ?Sized> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}
