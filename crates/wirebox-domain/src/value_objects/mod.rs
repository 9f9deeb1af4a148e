//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeKey`] | Identifier of a sized type or trait object |
//! | [`Instance`] | Type-erased shared object |
//! | [`Parameter`] | One constructor parameter |
//! | [`Constructor`] | Ordered parameters plus a build function |
//! | [`TypeDescriptor`] | Constructor metadata for a type, or an abstract marker |

/// Constructor descriptors
pub mod descriptor;
/// Type-erased instances
pub mod instance;
/// Type identifiers
pub mod type_key;

pub use descriptor::{BuildFn, Constructor, DefaultValue, Parameter, ParameterKind, TypeDescriptor};
pub use instance::Instance;
pub use type_key::TypeKey;
