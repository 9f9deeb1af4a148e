//! Domain ports
//!
//! Contracts that user types implement to take part in autowiring.

/// Constructor description and argument passing
pub mod injectable;

pub use injectable::{Argument, Arguments, Injectable};
