//! Resolver bootstrap
//!
//! ```text
//! ConfigLoader → AppConfig ─┬─ init_logging(logging)
//!                           └─ build_resolver(resolver) → global::install
//! ```
//!
//! ## Usage
//!
//! ```
//! use wirebox_infrastructure::config::ConfigBuilder;
//! use wirebox_infrastructure::di::build_resolver;
//!
//! let config = ConfigBuilder::new().with_max_depth(16).build();
//! let resolver = build_resolver(&config);
//! assert_eq!(resolver.options().max_depth, 16);
//! ```

use std::sync::Arc;

use tracing::info;
use wirebox_application::{Resolver, ResolverOptions, global};
use wirebox_domain::error::Result;

use crate::config::{AppConfig, ConfigLoader};
use crate::logging::init_logging;

/// Create an empty resolver tuned by `config`
pub fn build_resolver(config: &AppConfig) -> Resolver {
    Resolver::with_options(ResolverOptions::from(config.resolver))
}

/// Replace the process-wide resolver with one tuned by `config`
///
/// Previously registered bindings and instances are discarded.
pub fn init_global(config: &AppConfig) -> Arc<Resolver> {
    let resolver = Arc::new(build_resolver(config));
    global::install(Arc::clone(&resolver));
    info!(
        max_depth = config.resolver.max_depth,
        "Global resolver initialized"
    );
    resolver
}

/// Load configuration, start logging and install the global resolver
///
/// Meant to be called once at process start.
pub fn init_app(loader: &ConfigLoader) -> Result<Arc<Resolver>> {
    let config = loader.load()?;
    init_logging(&config.logging)?;
    Ok(init_global(&config))
}
