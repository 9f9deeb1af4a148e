//! Configuration management
//!
//! Layered configuration: defaults, then a TOML file, then `WIREBOX_`
//! environment variables. Bindings are always made in code; the
//! configuration only tunes the resolver and logging.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, ResolverConfig};
