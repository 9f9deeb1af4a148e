//! # Application Layer
//!
//! The wirebox resolution engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`resolver`] | Binding table, instance cache and autowiring |
//! | [`binding`] | Binding entries and the tagged [`Concrete`] variant |
//! | [`registry`] | Constructor descriptors (`linkme` slice + runtime) |
//! | [`global`] | Process-wide resolver with `reset` for tests |
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wirebox_application::Resolver;
//! use wirebox_domain::{Arguments, Injectable, Parameter, Result};
//!
//! struct Engine;
//!
//! impl Injectable for Engine {
//!     fn construct(_: &mut Arguments) -> Result<Self> {
//!         Ok(Engine)
//!     }
//! }
//!
//! struct Car {
//!     engine: Arc<Engine>,
//!     model: String,
//! }
//!
//! impl Injectable for Car {
//!     fn parameters() -> Vec<Parameter> {
//!         vec![
//!             Parameter::dependency::<Engine>("engine"),
//!             Parameter::with_default("model", String::from("roadster")),
//!         ]
//!     }
//!
//!     fn construct(args: &mut Arguments) -> Result<Self> {
//!         Ok(Car {
//!             engine: args.dependency()?,
//!             model: args.value()?,
//!         })
//!     }
//! }
//!
//! let resolver = Resolver::new();
//! resolver.register::<Engine>().register::<Car>();
//!
//! let car = resolver.create::<Car>()?;
//! assert_eq!(car.model, "roadster");
//! # Ok::<(), wirebox_domain::Error>(())
//! ```

pub mod binding;
pub mod global;
mod guard;
pub mod registry;
pub mod resolver;

pub use binding::{Binding, CastFn, Concrete, Factory, Upcast};
pub use global::{install, instance, reset};
pub use registry::{INJECTABLES, InjectableEntry, TypeRegistry, find_injectable, list_injectables};
pub use resolver::{Resolver, ResolverOptions};
