//! The process-wide resolver
//!
//! These tests share global state and hold `GLOBAL_LOCK` for their duration.

use std::sync::{Arc, Mutex, MutexGuard};

use wirebox_application::{Resolver, global};

use crate::test_utils::*;

static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    GLOBAL_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[test]
fn test_instance_is_stable_until_reset() {
    let _lock = lock();
    global::reset();

    let first = global::instance();
    let second = global::instance();
    assert!(Arc::ptr_eq(&first, &second));

    global::reset();
    let third = global::instance();
    assert!(!Arc::ptr_eq(&first, &third));
}

#[test]
fn test_reset_discards_bindings_and_instances() {
    let _lock = lock();
    global::reset();

    global::instance()
        .singleton::<Counter, Counter>()
        .register_instance(Arc::new(Simple));
    global::instance().create::<Counter>().unwrap();
    assert!(global::instance().has_instance::<Counter>());

    global::reset();
    let fresh = global::instance();
    assert_eq!(fresh.binding_count(), 0);
    assert_eq!(fresh.instance_count(), 0);
}

#[test]
fn test_install_replaces_global() {
    let _lock = lock();
    let custom = Arc::new(Resolver::new());
    custom.bind::<dyn ValueSource, Implementation>();

    global::install(Arc::clone(&custom));
    assert!(Arc::ptr_eq(&global::instance(), &custom));
    assert_eq!(
        global::instance()
            .create::<dyn ValueSource>()
            .unwrap()
            .value(),
        Implementation::VALUE
    );

    global::reset();
    assert!(!Arc::ptr_eq(&global::instance(), &custom));
}

#[test]
fn test_old_handle_survives_reset() {
    let _lock = lock();
    global::reset();

    let old = global::instance();
    old.singleton::<Counter, Counter>();
    global::reset();

    assert!(old.create::<Counter>().is_ok());
    assert!(!global::instance().has_binding::<Counter>());
}
