//! The process-wide resolver
//!
//! Code that owns its wiring should create a [`Resolver`] and pass it
//! around. The global instance exists for code that cannot, and for test
//! harnesses that need to start from a clean slate with [`reset`].

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::resolver::Resolver;

static GLOBAL_RESOLVER: Lazy<ArcSwapOption<Resolver>> = Lazy::new(ArcSwapOption::empty);

/// The process-wide resolver, created empty on first access
///
/// Returns the same resolver on every call until [`reset`] or [`install`].
pub fn instance() -> Arc<Resolver> {
    if let Some(resolver) = GLOBAL_RESOLVER.load_full() {
        return resolver;
    }

    let fresh = Arc::new(Resolver::new());
    let previous =
        GLOBAL_RESOLVER.compare_and_swap(&None::<Arc<Resolver>>, Some(Arc::clone(&fresh)));
    match &*previous {
        // Another thread installed one first
        Some(existing) => Arc::clone(existing),
        None => {
            debug!("Global resolver created");
            fresh
        }
    }
}

/// Replace the process-wide resolver with `resolver`
pub fn install(resolver: Arc<Resolver>) {
    debug!("Global resolver installed");
    GLOBAL_RESOLVER.store(Some(resolver));
}

/// Discard the process-wide resolver
///
/// The next [`instance`] call creates a fresh one with empty tables.
/// Handles obtained earlier keep working but are no longer global.
pub fn reset() {
    debug!("Global resolver reset");
    GLOBAL_RESOLVER.store(None);
}
