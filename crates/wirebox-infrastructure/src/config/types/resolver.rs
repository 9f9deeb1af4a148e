//! Resolver configuration types

use serde::{Deserialize, Serialize};
use wirebox_application::ResolverOptions;
use wirebox_domain::constants::DEFAULT_MAX_RESOLUTION_DEPTH;

/// Resolver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of nested constructions on one resolution path
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}

impl From<ResolverConfig> for ResolverOptions {
    fn from(config: ResolverConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }
}
