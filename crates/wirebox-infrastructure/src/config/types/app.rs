//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, ResolverConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Resolver tunables
    pub resolver: ResolverConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}
