//! # Domain Layer
//!
//! Core types of the wirebox resolution engine, free of any runtime state.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error enum shared by every layer |
//! | [`value_objects`] | Type keys, erased instances, constructor descriptors |
//! | [`ports`] | The [`Injectable`](ports::Injectable) autowiring contract |
//! | [`constants`] | Engine-wide defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Argument, Arguments, Injectable};
pub use value_objects::{
    Constructor, DefaultValue, Instance, Parameter, ParameterKind, TypeDescriptor, TypeKey,
};
