//! # wirebox
//!
//! A minimal autowiring dependency injection resolver.
//!
//! Ask the resolver for a type and it hands back a fully built object:
//! recursively constructing constructor dependencies, honoring
//! interface-to-implementation bindings, and caching singletons.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wirebox::{implements, Arguments, Injectable, Parameter, Resolver, Result};
//!
//! trait Mailer: Send + Sync {
//!     fn send(&self, to: &str) -> String;
//! }
//!
//! struct SmtpMailer {
//!     host: String,
//! }
//!
//! impl Mailer for SmtpMailer {
//!     fn send(&self, to: &str) -> String {
//!         format!("{to} via {}", self.host)
//!     }
//! }
//!
//! impl Injectable for SmtpMailer {
//!     fn parameters() -> Vec<Parameter> {
//!         vec![Parameter::with_default("host", String::from("localhost"))]
//!     }
//!
//!     fn construct(args: &mut Arguments) -> Result<Self> {
//!         Ok(SmtpMailer { host: args.value()? })
//!     }
//! }
//!
//! implements!(SmtpMailer => dyn Mailer);
//!
//! struct Signup {
//!     mailer: Arc<dyn Mailer>,
//! }
//!
//! impl Injectable for Signup {
//!     fn parameters() -> Vec<Parameter> {
//!         vec![Parameter::dependency::<dyn Mailer>("mailer")]
//!     }
//!
//!     fn construct(args: &mut Arguments) -> Result<Self> {
//!         Ok(Signup { mailer: args.dependency()? })
//!     }
//! }
//!
//! let resolver = Resolver::new();
//! resolver
//!     .register::<SmtpMailer>()
//!     .register::<Signup>()
//!     .singleton::<dyn Mailer, SmtpMailer>();
//!
//! let signup = resolver.create::<Signup>()?;
//! assert_eq!(signup.mailer.send("ada"), "ada via localhost");
//! # Ok::<(), wirebox::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Type keys, constructor descriptors and errors
//! - `application` - The resolver, bindings and the global instance
//! - `infrastructure` - Configuration, logging and bootstrap

/// Domain layer - type keys, descriptors and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Application layer - resolver, bindings and descriptor registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use wirebox_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the resolver API at the crate root
pub use application::{
    Concrete, Factory, INJECTABLES, InjectableEntry, Resolver, ResolverOptions, Upcast, global,
};
pub use wirebox_application::implements;

// Re-export bootstrap entry points
pub use infrastructure::di::{init_app, init_global};
pub use infrastructure::{AppConfig, ConfigLoader};
