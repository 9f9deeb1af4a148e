//! Constructor Descriptor Registry
//!
//! Stands in for runtime reflection: the resolver looks up how to build a
//! type by its [`TypeKey`]. Descriptors come from two places:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ 1. Compile time:  #[linkme::distributed_slice(INJECTABLES)]  │
//! │                   static ENTRY: InjectableEntry = ...        │
//! │ 2. Runtime:       resolver.register::<T>()                   │
//! │                              ↓                               │
//! │ TypeRegistry::get(key)  → runtime entry, else slice entry    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a type at compile time
//!
//! ```ignore
//! use wirebox_application::registry::{InjectableEntry, INJECTABLES};
//!
//! #[linkme::distributed_slice(INJECTABLES)]
//! static MAILER: InjectableEntry = InjectableEntry::of::<SmtpMailer>();
//! ```

use dashmap::DashMap;
use wirebox_domain::ports::Injectable;
use wirebox_domain::value_objects::{TypeDescriptor, TypeKey};

/// Registry entry for a type with a compile-time constructor descriptor
pub struct InjectableEntry {
    /// Key of the registered type
    pub key: fn() -> TypeKey,
    /// Builds the type's descriptor
    pub describe: fn() -> TypeDescriptor,
}

impl InjectableEntry {
    /// Entry for an [`Injectable`] type
    pub const fn of<T: Injectable>() -> Self {
        Self {
            key: TypeKey::of::<T>,
            describe: TypeDescriptor::of::<T>,
        }
    }

    /// Entry marking `A` as abstract
    pub const fn abstract_type<A: ?Sized + 'static>() -> Self {
        Self {
            key: TypeKey::of::<A>,
            describe: TypeDescriptor::abstract_type::<A>,
        }
    }
}

// Auto-collection via linkme distributed slices - types submit entries at compile time
#[linkme::distributed_slice]
pub static INJECTABLES: [InjectableEntry] = [..];

/// Find a compile-time registered descriptor
pub fn find_injectable(key: &TypeKey) -> Option<TypeDescriptor> {
    INJECTABLES
        .iter()
        .find(|entry| (entry.key)() == *key)
        .map(|entry| (entry.describe)())
}

/// List the names of all compile-time registered types
pub fn list_injectables() -> Vec<&'static str> {
    INJECTABLES.iter().map(|entry| (entry.key)().name()).collect()
}

/// Descriptor lookup for one resolver
///
/// Runtime registrations shadow compile-time ones for the same key.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    runtime: DashMap<TypeKey, TypeDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry (compile-time entries are always visible)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a runtime descriptor
    pub fn insert(&self, descriptor: TypeDescriptor) {
        self.runtime.insert(*descriptor.key(), descriptor);
    }

    /// Descriptor for `key`, if any
    pub fn get(&self, key: &TypeKey) -> Option<TypeDescriptor> {
        self.runtime
            .get(key)
            .map(|entry| entry.value().clone())
            .or_else(|| find_injectable(key))
    }

    /// Whether a descriptor exists for `key`
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.runtime.contains_key(key) || INJECTABLES.iter().any(|entry| (entry.key)() == *key)
    }

    /// Number of runtime registrations
    pub fn runtime_len(&self) -> usize {
        self.runtime.len()
    }
}
