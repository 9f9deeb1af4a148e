//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Resolution defaults are defined in `wirebox_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wirebox.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wirebox";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WIREBOX";

/// Separator between nested keys in environment variable names
///
/// `WIREBOX_RESOLVER__MAX_DEPTH` sets `resolver.max_depth`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a `tracing` filter directive
pub const LOG_FILTER_ENV: &str = "WIREBOX_LOG";

/// File stem used for rolling log files when none is given
pub const DEFAULT_LOG_FILE_STEM: &str = "wirebox";
