//! Binding Table Entries
//!
//! A binding tells the resolver how to satisfy requests for an abstract
//! key: either autowire a concrete type and view it through the abstract
//! type, or call a factory.
//!
//! ```text
//! bind::<dyn Greeter, English>()     → Concrete::Type { English, cast }
//! bind_factory::<Config>(|r| ...)    → Concrete::Factory(..)
//! ```

use std::fmt;
use std::sync::Arc;

use wirebox_domain::error::Result;
use wirebox_domain::value_objects::{Instance, TypeKey};

use crate::resolver::Resolver;

/// Conversion from a concrete type to the abstract type it is bound as
///
/// Every type converts to itself. Trait-object conversions are declared
/// with [`implements!`](crate::implements):
///
/// ```
/// use std::sync::Arc;
/// use wirebox_application::{implements, Upcast};
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".into()
///     }
/// }
///
/// implements!(English => dyn Greeter);
///
/// let greeter = <English as Upcast<dyn Greeter>>::upcast(Arc::new(English));
/// assert_eq!(greeter.greet(), "hello");
/// ```
pub trait Upcast<A: ?Sized>: Send + Sync + 'static {
    /// View the concrete value as `A`
    fn upcast(self: Arc<Self>) -> Arc<A>;
}

impl<T: Send + Sync + 'static> Upcast<T> for T {
    fn upcast(self: Arc<Self>) -> Arc<T> {
        self
    }
}

/// Declare that a concrete type can be bound to one or more trait objects
#[macro_export]
macro_rules! implements {
    ($concrete:ty => $($abstract:ty),+ $(,)?) => {
        $(
            impl $crate::Upcast<$abstract> for $concrete {
                fn upcast(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$abstract> {
                    self
                }
            }
        )+
    };
}

/// Converts an autowired concrete instance into the abstract view
pub type CastFn = fn(Instance) -> Result<Instance>;

type FactoryFn = dyn Fn(&Resolver) -> Result<Instance> + Send + Sync;

/// Factory function producing an instance for an abstract key
#[derive(Clone)]
pub struct Factory(Arc<FactoryFn>);

impl Factory {
    /// Wrap an untyped factory
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&Resolver) -> Result<Instance> + Send + Sync + 'static,
    {
        Self(Arc::new(factory))
    }

    /// Wrap a factory returning `Arc<A>`
    pub fn typed<A, F>(factory: F) -> Self
    where
        A: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver) -> Result<Arc<A>> + Send + Sync + 'static,
    {
        Self::new(move |resolver| factory(resolver).map(Instance::new::<A>))
    }

    /// Invoke the factory with the resolver as its only argument
    pub fn call(&self, resolver: &Resolver) -> Result<Instance> {
        (self.0)(resolver)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Factory(..)")
    }
}

/// What a binding resolves to
#[derive(Clone)]
pub enum Concrete {
    /// Autowire `key`, then convert the result with `cast`
    Type {
        /// Concrete type to autowire
        key: TypeKey,
        /// Conversion into the abstract view
        cast: CastFn,
    },
    /// Call a factory
    Factory(Factory),
}

impl Concrete {
    /// Bind to concrete type `C`, viewed as `A`
    pub fn of<A, C>() -> Self
    where
        A: ?Sized + Send + Sync + 'static,
        C: Upcast<A>,
    {
        Self::Type {
            key: TypeKey::of::<C>(),
            cast: cast_instance::<A, C>,
        }
    }

    /// Bind to a typed factory
    pub fn factory<A, F>(factory: F) -> Self
    where
        A: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver) -> Result<Arc<A>> + Send + Sync + 'static,
    {
        Self::Factory(Factory::typed(factory))
    }
}

impl fmt::Debug for Concrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type { key, .. } => f.debug_tuple("Type").field(key).finish(),
            Self::Factory(factory) => factory.fmt(f),
        }
    }
}

/// A binding table entry
#[derive(Debug, Clone)]
pub struct Binding {
    /// How to produce the instance
    pub concrete: Concrete,
    /// Whether the first result is cached under the abstract key
    pub singleton: bool,
}

impl Binding {
    /// Create a binding
    pub fn new(concrete: Concrete, singleton: bool) -> Self {
        Self {
            concrete,
            singleton,
        }
    }
}

fn cast_instance<A, C>(instance: Instance) -> Result<Instance>
where
    A: ?Sized + Send + Sync + 'static,
    C: Upcast<A>,
{
    let concrete = instance.downcast::<C>()?;
    Ok(Instance::new(<C as Upcast<A>>::upcast(concrete)))
}
