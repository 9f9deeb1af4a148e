//! Constructor descriptors
//!
//! Rust has no runtime reflection, so every autowirable type describes its
//! constructor ahead of time: an ordered list of [`Parameter`]s and a build
//! function that receives the resolved arguments positionally.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::{Instance, TypeKey};
use crate::error::Result;
use crate::ports::{Arguments, Injectable};

type DefaultFn = dyn Fn() -> Box<dyn Any + Send> + Send + Sync;

/// Produces a fresh copy of a parameter's declared default value
#[derive(Clone)]
pub struct DefaultValue {
    type_name: &'static str,
    produce: Arc<DefaultFn>,
}

impl DefaultValue {
    /// Default value that is cloned for every construction
    pub fn new<V: Clone + Send + Sync + 'static>(value: V) -> Self {
        Self {
            type_name: std::any::type_name::<V>(),
            produce: Arc::new(move || Box::new(value.clone())),
        }
    }

    /// Produce the value
    pub fn produce(&self) -> Box<dyn Any + Send> {
        (self.produce)()
    }

    /// Name of the default's type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultValue")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// How a parameter gets its value
#[derive(Debug, Clone)]
pub enum ParameterKind {
    /// A reference to another resolvable type (sized or `dyn Trait`)
    Dependency(TypeKey),
    /// A scalar value that is never resolved, only defaulted
    Scalar {
        /// Declared type of the scalar
        type_name: &'static str,
        /// Declared default, if any
        default: Option<DefaultValue>,
    },
}

/// One constructor parameter
#[derive(Debug, Clone)]
pub struct Parameter {
    name: &'static str,
    kind: ParameterKind,
}

impl Parameter {
    /// A parameter resolved by recursively creating `T`
    pub fn dependency<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            kind: ParameterKind::Dependency(TypeKey::of::<T>()),
        }
    }

    /// A scalar parameter without a default; always unresolvable
    pub fn scalar<V: 'static>(name: &'static str) -> Self {
        Self {
            name,
            kind: ParameterKind::Scalar {
                type_name: std::any::type_name::<V>(),
                default: None,
            },
        }
    }

    /// A scalar parameter with a declared default value
    pub fn with_default<V: Clone + Send + Sync + 'static>(name: &'static str, default: V) -> Self {
        Self {
            name,
            kind: ParameterKind::Scalar {
                type_name: std::any::type_name::<V>(),
                default: Some(DefaultValue::new(default)),
            },
        }
    }

    /// Parameter name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// How the parameter is resolved
    pub fn kind(&self) -> &ParameterKind {
        &self.kind
    }

    /// Whether the parameter refers to another type
    pub fn is_dependency(&self) -> bool {
        matches!(self.kind, ParameterKind::Dependency(_))
    }
}

/// Build function receiving the resolved argument list
pub type BuildFn = fn(&mut Arguments) -> Result<Instance>;

/// Ordered parameter list plus the function that builds the instance
#[derive(Clone)]
pub struct Constructor {
    parameters: Vec<Parameter>,
    build: BuildFn,
}

impl Constructor {
    /// Create a constructor descriptor
    pub fn new(parameters: Vec<Parameter>, build: BuildFn) -> Self {
        Self { parameters, build }
    }

    /// Parameters in declaration order
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Build the instance from resolved arguments
    pub fn build(&self, arguments: &mut Arguments) -> Result<Instance> {
        (self.build)(arguments)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Everything the resolver knows about how to construct a type
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    key: TypeKey,
    constructor: Option<Constructor>,
}

impl TypeDescriptor {
    /// Descriptor for an [`Injectable`] type
    pub fn of<T: Injectable>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            constructor: Some(Constructor::new(T::parameters(), build_injectable::<T>)),
        }
    }

    /// Descriptor marking `A` as abstract (never constructible directly)
    pub fn abstract_type<A: ?Sized + 'static>() -> Self {
        Self {
            key: TypeKey::of::<A>(),
            constructor: None,
        }
    }

    /// Descriptor with a hand-written constructor
    pub fn with_constructor(key: TypeKey, constructor: Constructor) -> Self {
        Self {
            key,
            constructor: Some(constructor),
        }
    }

    /// Key of the described type
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// The constructor, `None` for abstract types
    pub fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }

    /// Whether the type can be instantiated
    pub fn is_instantiable(&self) -> bool {
        self.constructor.is_some()
    }
}

fn build_injectable<T: Injectable>(arguments: &mut Arguments) -> Result<Instance> {
    let value = T::construct(arguments)?;
    arguments.finish()?;
    Ok(Instance::new(Arc::new(value)))
}
