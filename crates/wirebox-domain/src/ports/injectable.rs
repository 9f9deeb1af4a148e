//! Autowiring port
//!
//! Types opt into autowiring by implementing [`Injectable`]: they describe
//! their constructor parameters and build themselves from the positional
//! [`Arguments`] the resolver produced for those parameters.

use std::any::Any;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::{Instance, Parameter, TypeKey};

/// A type the resolver can construct on its own
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use wirebox_domain::ports::{Arguments, Injectable};
/// use wirebox_domain::value_objects::Parameter;
/// use wirebox_domain::Result;
///
/// struct Clock;
///
/// impl Injectable for Clock {
///     fn construct(_: &mut Arguments) -> Result<Self> {
///         Ok(Clock)
///     }
/// }
///
/// struct Scheduler {
///     clock: Arc<Clock>,
///     name: String,
/// }
///
/// impl Injectable for Scheduler {
///     fn parameters() -> Vec<Parameter> {
///         vec![
///             Parameter::dependency::<Clock>("clock"),
///             Parameter::with_default("name", String::from("default")),
///         ]
///     }
///
///     fn construct(args: &mut Arguments) -> Result<Self> {
///         Ok(Scheduler {
///             clock: args.dependency()?,
///             name: args.value()?,
///         })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Constructor parameters in declaration order
    ///
    /// The default is a zero-parameter constructor.
    fn parameters() -> Vec<Parameter> {
        Vec::new()
    }

    /// Build the value from arguments resolved for [`Injectable::parameters`]
    fn construct(args: &mut Arguments) -> Result<Self>;
}

/// A single resolved constructor argument
pub enum Argument {
    /// Result of resolving a dependency parameter
    Dependency(Instance),
    /// A scalar default value
    Value(Box<dyn Any + Send>),
}

impl std::fmt::Debug for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dependency(instance) => f.debug_tuple("Dependency").field(instance).finish(),
            Self::Value(_) => f.write_str("Value(..)"),
        }
    }
}

/// Resolved arguments, consumed left to right by a constructor
#[derive(Debug)]
pub struct Arguments {
    owner: TypeKey,
    position: usize,
    values: VecDeque<Argument>,
}

impl Arguments {
    /// Arguments for constructing `owner`
    pub fn new(owner: TypeKey, values: Vec<Argument>) -> Self {
        Self {
            owner,
            position: 0,
            values: values.into(),
        }
    }

    /// Empty argument list for a zero-parameter constructor
    pub fn empty(owner: TypeKey) -> Self {
        Self::new(owner, Vec::new())
    }

    /// Type these arguments were resolved for
    pub fn owner(&self) -> &TypeKey {
        &self.owner
    }

    /// Arguments not yet taken
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Take the next argument as a resolved dependency of type `T`
    pub fn dependency<T: ?Sized + 'static>(&mut self) -> Result<Arc<T>> {
        let position = self.position;
        match self.next_argument()? {
            Argument::Dependency(instance) => instance.downcast::<T>().map_err(|_| {
                Error::argument_mismatch(
                    self.owner.name(),
                    position,
                    format!(
                        "expected dependency {}, found {}",
                        std::any::type_name::<T>(),
                        instance.key()
                    ),
                )
            }),
            Argument::Value(_) => Err(Error::argument_mismatch(
                self.owner.name(),
                position,
                format!(
                    "expected dependency {}, found a scalar value",
                    std::any::type_name::<T>()
                ),
            )),
        }
    }

    /// Take the next argument as a scalar value of type `V`
    pub fn value<V: 'static>(&mut self) -> Result<V> {
        let position = self.position;
        match self.next_argument()? {
            Argument::Value(value) => value.downcast::<V>().map(|boxed| *boxed).map_err(|_| {
                Error::argument_mismatch(
                    self.owner.name(),
                    position,
                    format!("expected value of type {}", std::any::type_name::<V>()),
                )
            }),
            Argument::Dependency(instance) => Err(Error::argument_mismatch(
                self.owner.name(),
                position,
                format!(
                    "expected value of type {}, found dependency {}",
                    std::any::type_name::<V>(),
                    instance.key()
                ),
            )),
        }
    }

    /// Fail if the constructor left arguments untaken
    pub fn finish(&self) -> Result<()> {
        if self.values.is_empty() {
            Ok(())
        } else {
            Err(Error::argument_mismatch(
                self.owner.name(),
                self.position,
                format!("{} argument(s) were never consumed", self.values.len()),
            ))
        }
    }

    fn next_argument(&mut self) -> Result<Argument> {
        let argument = self.values.pop_front().ok_or_else(|| {
            Error::argument_mismatch(self.owner.name(), self.position, "argument list exhausted")
        })?;
        self.position += 1;
        Ok(argument)
    }
}
