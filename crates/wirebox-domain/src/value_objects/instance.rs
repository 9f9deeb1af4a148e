//! Type-erased shared objects

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::TypeKey;
use crate::error::{Error, Result};

/// A constructed object, erased to be stored in binding tables and caches
///
/// Internally holds an `Arc<T>` for the type it was created as, which may be
/// a trait object. Cloning an `Instance` or downcasting it never copies the
/// object: every clone hands out the same allocation.
#[derive(Clone)]
pub struct Instance {
    key: TypeKey,
    value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Erase a shared object of type `T`
    pub fn new<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            value: Arc::new(value),
        }
    }

    /// Key of the type this instance was erased as
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Whether this instance was erased as `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.value.is::<Arc<T>>()
    }

    /// Recover the typed handle
    ///
    /// Fails with [`Error::TypeMismatch`] if the instance was erased as a
    /// different type.
    pub fn downcast<T: ?Sized + 'static>(&self) -> Result<Arc<T>> {
        self.value
            .downcast_ref::<Arc<T>>()
            .map(Arc::clone)
            .ok_or_else(|| Error::type_mismatch(std::any::type_name::<T>(), self.key.name()))
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance").field("type", &self.key.name()).finish()
    }
}
