//! Resolution path tracking
//!
//! Every `create` call that has to construct something pushes its key onto
//! a per-thread path, tagged with the resolver it runs in. Meeting a key
//! that is already on the path means the dependency graph loops back on
//! itself. Resolution is synchronous and stays on the calling thread, so a
//! thread-local stack sees the whole path, including hops through factory
//! functions that call back into the resolver.

use std::cell::RefCell;

use wirebox_domain::constants::RESOLUTION_PATH_SEPARATOR;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::value_objects::TypeKey;

thread_local! {
    static RESOLUTION_PATH: RefCell<Vec<(u64, TypeKey)>> = const { RefCell::new(Vec::new()) };
}

/// Marks a key as being resolved until dropped
#[derive(Debug)]
pub(crate) struct ResolutionGuard {
    resolver: u64,
    key: TypeKey,
}

impl ResolutionGuard {
    /// Push `key` onto the current path of `resolver`
    ///
    /// Fails with [`Error::CyclicDependency`] if `key` is already being
    /// resolved, or [`Error::DepthExceeded`] if the path is already
    /// `max_depth` keys long.
    pub(crate) fn enter(resolver: u64, key: &TypeKey, max_depth: usize) -> Result<Self> {
        RESOLUTION_PATH.with(|path| {
            let mut path = path.borrow_mut();
            let active: Vec<&TypeKey> = path
                .iter()
                .filter(|(owner, _)| *owner == resolver)
                .map(|(_, active)| active)
                .collect();

            if let Some(start) = active.iter().position(|active| *active == key) {
                let cycle = active[start..]
                    .iter()
                    .map(|active| active.short_name())
                    .chain(std::iter::once(key.short_name()))
                    .collect::<Vec<_>>()
                    .join(RESOLUTION_PATH_SEPARATOR);
                return Err(Error::cyclic_dependency(cycle));
            }
            if active.len() >= max_depth {
                return Err(Error::depth_exceeded(key.name(), max_depth));
            }

            path.push((resolver, *key));
            Ok(Self {
                resolver,
                key: *key,
            })
        })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLUTION_PATH.with(|path| {
            let mut path = path.borrow_mut();
            if let Some(index) = path
                .iter()
                .rposition(|(owner, key)| *owner == self.resolver && *key == self.key)
            {
                path.remove(index);
            }
        });
    }
}

/// Current resolution depth of `resolver` on this thread
pub(crate) fn depth(resolver: u64) -> usize {
    RESOLUTION_PATH.with(|path| {
        path.borrow()
            .iter()
            .filter(|(owner, _)| *owner == resolver)
            .count()
    })
}
