//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wirebox
///
/// Every failure aborts the whole `create` call it happened in. Errors raised
/// deep inside a dependency graph reach the caller unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested type cannot be constructed (abstract, or no constructor descriptor)
    #[error("Type {type_name} is not instantiable: {reason}")]
    NotInstantiable {
        /// Name of the type that was requested
        type_name: String,
        /// Why construction is impossible
        reason: String,
    },

    /// A constructor parameter has no resolvable type and no default value
    #[error("Cannot resolve parameter '{parameter}' of {type_name}")]
    UnresolvableParameter {
        /// Type whose constructor declares the parameter
        type_name: String,
        /// Name of the parameter
        parameter: String,
    },

    /// A type depends on itself through its constructor graph
    #[error("Cyclic dependency detected: {path}")]
    CyclicDependency {
        /// Resolution path, e.g. `A -> B -> A`
        path: String,
    },

    /// Resolution went deeper than the configured limit
    #[error("Resolution depth limit of {limit} exceeded while resolving {type_name}")]
    DepthExceeded {
        /// Type being resolved when the limit was hit
        type_name: String,
        /// Configured maximum depth
        limit: usize,
    },

    /// An instance did not have the type it was requested as
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Requested type
        expected: String,
        /// Type actually stored
        found: String,
    },

    /// A constructor pulled an argument that does not match its descriptor
    #[error("Argument mismatch in {type_name} at position {position}: {message}")]
    ArgumentMismatch {
        /// Type being constructed
        type_name: String,
        /// Zero-based argument position
        position: usize,
        /// What went wrong
        message: String,
    },

    /// A factory function or constructor reported a failure
    #[error("Factory for {type_name} failed: {message}")]
    Factory {
        /// Type the factory was producing
        type_name: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a not-instantiable error
    pub fn not_instantiable<N: Into<String>, R: Into<String>>(type_name: N, reason: R) -> Self {
        Self::NotInstantiable {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unresolvable parameter error
    pub fn unresolvable_parameter<N: Into<String>, P: Into<String>>(
        type_name: N,
        parameter: P,
    ) -> Self {
        Self::UnresolvableParameter {
            type_name: type_name.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a cyclic dependency error
    pub fn cyclic_dependency<S: Into<String>>(path: S) -> Self {
        Self::CyclicDependency { path: path.into() }
    }

    /// Create a depth exceeded error
    pub fn depth_exceeded<S: Into<String>>(type_name: S, limit: usize) -> Self {
        Self::DepthExceeded {
            type_name: type_name.into(),
            limit,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<E: Into<String>, F: Into<String>>(expected: E, found: F) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an argument mismatch error
    pub fn argument_mismatch<N: Into<String>, M: Into<String>>(
        type_name: N,
        position: usize,
        message: M,
    ) -> Self {
        Self::ArgumentMismatch {
            type_name: type_name.into(),
            position,
            message: message.into(),
        }
    }
}

// Factory error creation methods
impl Error {
    /// Create a factory error
    pub fn factory<N: Into<String>, M: Into<String>>(type_name: N, message: M) -> Self {
        Self::Factory {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a factory error with source
    pub fn factory_with_source<
        N: Into<String>,
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        type_name: N,
        message: M,
        source: E,
    ) -> Self {
        Self::Factory {
            type_name: type_name.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Whether the error came from the resolution engine itself
    /// rather than from user factories or infrastructure
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::NotInstantiable { .. }
                | Self::UnresolvableParameter { .. }
                | Self::CyclicDependency { .. }
                | Self::DepthExceeded { .. }
                | Self::TypeMismatch { .. }
                | Self::ArgumentMismatch { .. }
        )
    }
}
