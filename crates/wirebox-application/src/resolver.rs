//! Autowiring Resolver
//!
//! The resolver owns the binding table, the instance cache and the type
//! registry, and turns a requested [`TypeKey`] into an object.
//!
//! ## Resolution order
//!
//! ```text
//! create(id)
//!    │
//!    ├─ 1. instance cache has id ───────────→ cached instance
//!    │
//!    ├─ 2. binding table has id ─→ resolve_binding
//!    │        ├─ Factory(f)     → f(&resolver)
//!    │        ├─ Type(C, cast)  → cast(autowire(C))
//!    │        └─ singleton      → cache under id (the abstract key)
//!    │
//!    └─ 3. autowire(id)
//!             └─ for each parameter, in order:
//!                  ├─ dependency     → create(dep)   (recursive)
//!                  ├─ scalar+default → default
//!                  └─ scalar         → UnresolvableParameter
//! ```
//!
//! ## Concurrency
//!
//! `Resolver` is `Send + Sync`. The tables are concurrent maps and no map
//! lock is held while user constructors or factories run. A singleton
//! binding is built inside a per-key once-slot, so threads racing on the
//! first `create` all receive the one instance that was constructed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use tracing::{debug, trace};
use wirebox_domain::constants::DEFAULT_MAX_RESOLUTION_DEPTH;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::{Argument, Arguments, Injectable};
use wirebox_domain::value_objects::{Instance, Parameter, ParameterKind, TypeDescriptor, TypeKey};

use crate::binding::{Binding, Concrete, Upcast};
use crate::guard::ResolutionGuard;
use crate::registry::TypeRegistry;

static NEXT_RESOLVER_ID: AtomicU64 = AtomicU64::new(1);

/// Tunables for a [`Resolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Maximum number of nested constructions on one resolution path
    pub max_depth: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}

/// Dependency injection resolver
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use wirebox_application::{implements, Resolver};
/// use wirebox_domain::{Arguments, Injectable, Result};
///
/// trait Store: Send + Sync {
///     fn name(&self) -> &'static str;
/// }
///
/// struct MemoryStore;
///
/// impl Store for MemoryStore {
///     fn name(&self) -> &'static str {
///         "memory"
///     }
/// }
///
/// impl Injectable for MemoryStore {
///     fn construct(_: &mut Arguments) -> Result<Self> {
///         Ok(MemoryStore)
///     }
/// }
///
/// implements!(MemoryStore => dyn Store);
///
/// let resolver = Resolver::new();
/// resolver
///     .register::<MemoryStore>()
///     .singleton::<dyn Store, MemoryStore>();
///
/// let first = resolver.create::<dyn Store>()?;
/// let second = resolver.create::<dyn Store>()?;
/// assert_eq!(first.name(), "memory");
/// assert!(Arc::ptr_eq(&first, &second));
/// # Ok::<(), wirebox_domain::Error>(())
/// ```
pub struct Resolver {
    id: u64,
    options: ResolverOptions,
    bindings: DashMap<TypeKey, Binding>,
    instances: DashMap<TypeKey, Instance>,
    singleton_slots: DashMap<TypeKey, Arc<OnceCell<Instance>>>,
    registry: TypeRegistry,
}

impl Resolver {
    /// Create an empty resolver with default options
    pub fn new() -> Self {
        Self::with_options(ResolverOptions::default())
    }

    /// Create an empty resolver
    pub fn with_options(options: ResolverOptions) -> Self {
        Self {
            id: NEXT_RESOLVER_ID.fetch_add(1, Ordering::Relaxed),
            options,
            bindings: DashMap::new(),
            instances: DashMap::new(),
            singleton_slots: DashMap::new(),
            registry: TypeRegistry::new(),
        }
    }

    /// Options this resolver was created with
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Produce an object satisfying `T`
    pub fn create<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.create_key(&TypeKey::of::<T>())?.downcast::<T>()
    }

    /// Produce an object satisfying `key`
    ///
    /// Looks in the instance cache, then the binding table, then autowires
    /// `key` itself.
    pub fn create_key(&self, key: &TypeKey) -> Result<Instance> {
        if let Some(instance) = self.cached(key) {
            trace!(type_name = %key, "Resolved from instance cache");
            return Ok(instance);
        }

        let _guard = ResolutionGuard::enter(self.id, key, self.options.max_depth)?;

        // Cloned out so the table is never locked while constructing
        let binding = self.bindings.get(key).map(|entry| entry.value().clone());
        match binding {
            Some(binding) => self.resolve_binding(key, binding),
            None => self.autowire(key),
        }
    }

    fn resolve_binding(&self, key: &TypeKey, binding: Binding) -> Result<Instance> {
        debug!(
            type_name = %key,
            concrete = ?binding.concrete,
            singleton = binding.singleton,
            "Resolving binding"
        );

        if !binding.singleton {
            return self.build_concrete(&binding.concrete);
        }

        let slot = Arc::clone(self.singleton_slots.entry(*key).or_default().value());
        let built = slot
            .get_or_try_init(|| self.build_concrete(&binding.concrete))?
            .clone();

        // A registered instance wins over one built concurrently
        let cached = self.instances.entry(*key).or_insert(built).value().clone();
        Ok(cached)
    }

    fn build_concrete(&self, concrete: &Concrete) -> Result<Instance> {
        match concrete {
            Concrete::Factory(factory) => factory.call(self),
            Concrete::Type { key, cast } => cast(self.autowire(key)?),
        }
    }

    /// Construct a fresh `key` from its constructor descriptor
    ///
    /// Never reads or writes the instance cache.
    fn autowire(&self, key: &TypeKey) -> Result<Instance> {
        let descriptor = self.registry.get(key).ok_or_else(|| {
            Error::not_instantiable(key.name(), "no constructor descriptor is registered")
        })?;
        let constructor = descriptor
            .constructor()
            .ok_or_else(|| Error::not_instantiable(key.name(), "type is abstract"))?;

        if constructor.parameters().is_empty() {
            debug!(type_name = %key, "Autowiring without arguments");
            return constructor.build(&mut Arguments::empty(*key));
        }

        debug!(
            type_name = %key,
            parameters = constructor.parameters().len(),
            "Autowiring constructor"
        );
        let values = constructor
            .parameters()
            .iter()
            .map(|parameter| self.resolve_parameter(key, parameter))
            .collect::<Result<Vec<_>>>()?;

        constructor.build(&mut Arguments::new(*key, values))
    }

    fn resolve_parameter(&self, owner: &TypeKey, parameter: &Parameter) -> Result<Argument> {
        match parameter.kind() {
            ParameterKind::Dependency(dependency) => {
                trace!(
                    owner = %owner,
                    parameter = parameter.name(),
                    dependency = %dependency,
                    "Resolving dependency"
                );
                self.create_key(dependency).map(Argument::Dependency)
            }
            ParameterKind::Scalar {
                default: Some(default),
                ..
            } => {
                trace!(owner = %owner, parameter = parameter.name(), "Using default value");
                Ok(Argument::Value(default.produce()))
            }
            ParameterKind::Scalar { default: None, .. } => {
                Err(Error::unresolvable_parameter(owner.name(), parameter.name()))
            }
        }
    }

    fn cached(&self, key: &TypeKey) -> Option<Instance> {
        self.instances.get(key).map(|entry| entry.value().clone())
    }

    // ========================================================================
    // Bindings
    // ========================================================================

    /// Bind `abstract_key` to `concrete`, replacing any previous binding
    ///
    /// Pure metadata: nothing is constructed.
    pub fn bind_key(&self, abstract_key: TypeKey, concrete: Concrete, singleton: bool) -> &Self {
        debug!(type_name = %abstract_key, concrete = ?concrete, singleton, "Binding registered");
        self.singleton_slots.remove(&abstract_key);
        self.bindings.insert(abstract_key, Binding::new(concrete, singleton));
        self
    }

    /// Bind `A` to the concrete type `C`; each `create::<A>()` autowires a new `C`
    pub fn bind<A, C>(&self) -> &Self
    where
        A: ?Sized + Send + Sync + 'static,
        C: Upcast<A>,
    {
        self.bind_key(TypeKey::of::<A>(), Concrete::of::<A, C>(), false)
    }

    /// Bind `A` to a factory called with this resolver on each `create::<A>()`
    pub fn bind_factory<A, F>(&self, factory: F) -> &Self
    where
        A: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver) -> Result<Arc<A>> + Send + Sync + 'static,
    {
        self.bind_key(TypeKey::of::<A>(), Concrete::factory(factory), false)
    }

    /// Bind `A` to `C`, constructing it at most once
    pub fn singleton<A, C>(&self) -> &Self
    where
        A: ?Sized + Send + Sync + 'static,
        C: Upcast<A>,
    {
        self.bind_key(TypeKey::of::<A>(), Concrete::of::<A, C>(), true)
    }

    /// Bind `A` to a factory that is called at most once
    pub fn singleton_factory<A, F>(&self, factory: F) -> &Self
    where
        A: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver) -> Result<Arc<A>> + Send + Sync + 'static,
    {
        self.bind_key(TypeKey::of::<A>(), Concrete::factory(factory), true)
    }

    /// Make every future `create::<A>()` return exactly `instance`
    pub fn register_instance<A>(&self, instance: Arc<A>) -> &Self
    where
        A: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<A>();
        debug!(type_name = %key, "Instance registered");
        self.instances.insert(key, Instance::new(instance));
        self
    }

    /// Drop the cached instance of `A`, if any; returns whether one existed
    pub fn forget_instance<A: ?Sized + 'static>(&self) -> bool {
        let key = TypeKey::of::<A>();
        self.singleton_slots.remove(&key);
        self.instances.remove(&key).is_some()
    }

    // ========================================================================
    // Type metadata
    // ========================================================================

    /// Register `T`'s constructor descriptor with this resolver
    pub fn register<T: Injectable>(&self) -> &Self {
        self.register_descriptor(TypeDescriptor::of::<T>())
    }

    /// Mark `A` as abstract: autowiring it fails until it is bound
    pub fn register_abstract<A: ?Sized + 'static>(&self) -> &Self {
        self.register_descriptor(TypeDescriptor::abstract_type::<A>())
    }

    /// Register a hand-built descriptor
    pub fn register_descriptor(&self, descriptor: TypeDescriptor) -> &Self {
        trace!(
            type_name = %descriptor.key(),
            instantiable = descriptor.is_instantiable(),
            "Descriptor registered"
        );
        self.registry.insert(descriptor);
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether `A` has a binding
    pub fn has_binding<A: ?Sized + 'static>(&self) -> bool {
        self.bindings.contains_key(&TypeKey::of::<A>())
    }

    /// Whether `A` has a cached instance
    pub fn has_instance<A: ?Sized + 'static>(&self) -> bool {
        self.instances.contains_key(&TypeKey::of::<A>())
    }

    /// Whether `A` has an entry point for resolution
    ///
    /// Only looks one level deep: dependencies of `A` may still fail.
    pub fn is_resolvable<A: ?Sized + 'static>(&self) -> bool {
        let key = TypeKey::of::<A>();
        self.instances.contains_key(&key)
            || self.bindings.contains_key(&key)
            || self
                .registry
                .get(&key)
                .is_some_and(|descriptor| descriptor.is_instantiable())
    }

    /// Number of bindings
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Number of cached instances
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("bindings", &self.bindings.len())
            .field("instances", &self.instances.len())
            .finish_non_exhaustive()
    }
}
