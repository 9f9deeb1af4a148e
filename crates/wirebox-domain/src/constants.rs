//! Domain constants

/// Default maximum depth of a single resolution path
///
/// Bounds recursion through very deep (but acyclic) dependency graphs.
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 64;

/// Separator used when rendering a resolution path
pub const RESOLUTION_PATH_SEPARATOR: &str = " -> ";
