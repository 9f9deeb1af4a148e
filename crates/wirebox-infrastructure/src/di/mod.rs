//! Resolver composition root
//!
//! Turns an [`AppConfig`](crate::config::AppConfig) into a configured
//! resolver and optionally installs it as the process-wide instance.

pub mod bootstrap;

pub use bootstrap::{build_resolver, init_app, init_global};
