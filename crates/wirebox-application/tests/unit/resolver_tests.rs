//! Tests for the resolution engine: cache, bindings and autowiring

use std::sync::Arc;

use wirebox_application::{Concrete, Resolver};
use wirebox_domain::{Error, Instance, TypeKey};

use crate::test_utils::*;

#[test]
fn test_create_simple_type() {
    let resolver = resolver();
    let simple = resolver.create::<Simple>().unwrap();
    assert_eq!(simple.hello(), "Hello, World!");
}

#[test]
fn test_create_returns_new_instance_each_time() {
    let resolver = resolver();
    let first = resolver.create::<Simple>().unwrap();
    let second = resolver.create::<Simple>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(!resolver.has_instance::<Simple>());
}

#[test]
fn test_autowiring_resolves_dependencies() {
    let resolver = resolver();
    let instance = resolver.create::<WithDependency>().unwrap();
    assert_eq!(instance.dependency_value(), Dependency::VALUE);
}

#[test]
fn test_autowired_dependency_uses_same_rules() {
    let resolver = resolver();
    let shared = Arc::new(Dependency);
    resolver.register_instance(Arc::clone(&shared));

    let instance = resolver.create::<WithDependency>().unwrap();
    assert!(Arc::ptr_eq(instance.dependency(), &shared));
}

#[test]
fn test_binding_interface_to_implementation() {
    let resolver = resolver();
    resolver.bind::<dyn ValueSource, Implementation>();

    let source = resolver.create::<dyn ValueSource>().unwrap();
    assert_eq!(source.value(), Implementation::VALUE);
}

#[test]
fn test_binding_reaches_nested_parameters() {
    let resolver = resolver();
    resolver.bind::<dyn ValueSource, Implementation>();

    let reporter = resolver.create::<Reporter>().unwrap();
    assert_eq!(reporter.report(), "value: Implementation Value");
}

#[test]
fn test_unbound_interface_is_not_instantiable() {
    let resolver = resolver();
    match resolver.create::<dyn ValueSource>().err() {
        Some(Error::NotInstantiable { type_name, reason }) => {
            assert!(type_name.contains("ValueSource"));
            assert_eq!(reason, "type is abstract");
        }
        other => panic!("Expected NotInstantiable, got {other:?}"),
    }
}

#[test]
fn test_unregistered_type_is_not_instantiable() {
    let resolver = resolver();
    assert!(matches!(
        resolver.create::<Unregistered>(),
        Err(Error::NotInstantiable { .. })
    ));

    resolver.register::<Unregistered>();
    assert!(resolver.create::<Unregistered>().is_ok());
}

#[test]
fn test_singleton_returns_same_instance() {
    let resolver = resolver();
    resolver.singleton::<Counter, Counter>();

    let first = resolver.create::<Counter>().unwrap();
    first.increment();

    let second = resolver.create::<Counter>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.value(), 1);

    second.increment();
    assert_eq!(second.value(), 2);
    assert_eq!(first.value(), 2);
}

#[test]
fn test_singleton_is_cached_under_abstract_key() {
    let resolver = resolver();
    resolver.singleton::<dyn ValueSource, Implementation>();

    let first = resolver.create::<dyn ValueSource>().unwrap();
    let second = resolver.create::<dyn ValueSource>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(resolver.has_instance::<dyn ValueSource>());
    assert!(!resolver.has_instance::<Implementation>());
}

#[test]
fn test_non_singleton_binding_is_never_cached() {
    let resolver = resolver();
    resolver.bind::<Counter, Counter>();

    let first = resolver.create::<Counter>().unwrap();
    let second = resolver.create::<Counter>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(resolver.instance_count(), 0);
}

#[test]
fn test_register_instance_returns_exact_object() {
    let resolver = resolver();
    let registered = Arc::new(Simple);
    resolver.register_instance(Arc::clone(&registered));

    let retrieved = resolver.create::<Simple>().unwrap();
    assert!(Arc::ptr_eq(&registered, &retrieved));
}

#[test]
fn test_register_instance_of_trait_object() {
    let resolver = resolver();
    let registered: Arc<dyn ValueSource> = Arc::new(Implementation);
    resolver.register_instance(Arc::clone(&registered));

    let retrieved = resolver.create::<dyn ValueSource>().unwrap();
    assert!(Arc::ptr_eq(&registered, &retrieved));
}

#[test]
fn test_instance_cache_takes_precedence_over_binding() {
    let resolver = resolver();
    let registered = Arc::new(Counter::default());
    registered.increment();

    resolver
        .bind::<Counter, Counter>()
        .register_instance(Arc::clone(&registered));

    let retrieved = resolver.create::<Counter>().unwrap();
    assert!(Arc::ptr_eq(&registered, &retrieved));
    assert_eq!(retrieved.value(), 1);
}

#[test]
fn test_factory_binding() {
    let resolver = resolver();
    resolver.bind_factory::<Product, _>(|_| Ok(Arc::new(Product::new("Factory Created"))));

    let product = resolver.create::<Product>().unwrap();
    assert_eq!(product.label.as_deref(), Some("Factory Created"));
}

#[test]
fn test_factory_receives_resolver() {
    let resolver = resolver();
    resolver.bind_factory::<Product, _>(|resolver: &Resolver| {
        let simple = resolver.create::<Simple>()?;
        Ok(Arc::new(Product::new(simple.hello())))
    });

    let product = resolver.create::<Product>().unwrap();
    assert_eq!(product.label.as_deref(), Some("Hello, World!"));
}

#[test]
fn test_singleton_factory_runs_once() {
    let resolver = resolver();
    let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    resolver.singleton_factory::<Product, _>(move |_| {
        counted.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(Arc::new(Product::new("once")))
    });

    let first = resolver.create::<Product>().unwrap();
    let second = resolver.create::<Product>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn test_factory_error_propagates_unchanged() {
    let resolver = resolver();
    resolver.bind_factory::<Product, _>(|_| Err(Error::factory("Product", "backend offline")));

    match resolver.create::<Product>().err() {
        Some(Error::Factory { message, .. }) => assert_eq!(message, "backend offline"),
        other => panic!("Expected Factory error, got {other:?}"),
    }
}

#[test]
fn test_failed_singleton_is_retried() {
    let resolver = resolver();
    let attempts = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counted = Arc::clone(&attempts);
    resolver.singleton_factory::<Product, _>(move |_| {
        if counted.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
            Err(Error::factory("Product", "first attempt fails"))
        } else {
            Ok(Arc::new(Product::new("second")))
        }
    });

    assert!(resolver.create::<Product>().is_err());
    assert!(!resolver.has_instance::<Product>());
    assert_eq!(
        resolver.create::<Product>().unwrap().label.as_deref(),
        Some("second")
    );
}

#[test]
fn test_rebinding_overwrites_previous_binding() {
    let resolver = resolver();
    resolver
        .bind_factory::<Product, _>(|_| Ok(Arc::new(Product::new("first"))))
        .bind_factory::<Product, _>(|_| Ok(Arc::new(Product::new("second"))));

    assert_eq!(resolver.binding_count(), 1);
    assert_eq!(
        resolver.create::<Product>().unwrap().label.as_deref(),
        Some("second")
    );
}

#[test]
fn test_binding_is_pure_metadata() {
    let resolver = resolver();
    resolver.bind_factory::<Product, _>(|_| panic!("factory must not run during bind"));
    assert!(resolver.has_binding::<Product>());
}

#[test]
fn test_default_parameter_value() {
    let resolver = resolver();
    let instance = resolver.create::<DefaultParams>().unwrap();
    assert_eq!(instance.value, "Default");
}

#[test]
fn test_unresolvable_parameter() {
    let resolver = resolver();
    match resolver.create::<Unresolvable>().err() {
        Some(Error::UnresolvableParameter {
            type_name,
            parameter,
        }) => {
            assert!(type_name.contains("Unresolvable"));
            assert_eq!(parameter, "port");
        }
        other => panic!("Expected UnresolvableParameter, got {other:?}"),
    }
}

#[test]
fn test_nested_failure_aborts_whole_resolution() {
    let resolver = resolver();
    assert!(matches!(
        resolver.create::<Server>(),
        Err(Error::UnresolvableParameter { ref parameter, .. }) if parameter == "port"
    ));
}

#[test]
fn test_nested_failure_can_be_fixed_by_binding() {
    let resolver = resolver();
    resolver.bind_factory::<Unresolvable, _>(|_| Ok(Arc::new(Unresolvable { port: 8080 })));

    let server = resolver.create::<Server>().unwrap();
    assert_eq!(server.inner.port, 8080);
}

#[test]
fn test_bind_key_with_untyped_concrete() {
    let resolver = resolver();
    resolver.bind_key(
        TypeKey::of::<dyn ValueSource>(),
        Concrete::of::<dyn ValueSource, Implementation>(),
        true,
    );

    let instance = resolver.create_key(&TypeKey::of::<dyn ValueSource>()).unwrap();
    assert!(instance.is::<dyn ValueSource>());
    assert!(resolver.has_instance::<dyn ValueSource>());
}

#[test]
fn test_untyped_factory_with_wrong_type_is_mismatch() {
    let resolver = resolver();
    resolver.bind_key(
        TypeKey::of::<Product>(),
        Concrete::Factory(wirebox_application::Factory::new(|_| {
            Ok(Instance::new(Arc::new(Simple)))
        })),
        false,
    );

    assert!(matches!(
        resolver.create::<Product>(),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_forget_instance() {
    let resolver = resolver();
    resolver.singleton::<Counter, Counter>();
    let first = resolver.create::<Counter>().unwrap();

    assert!(resolver.forget_instance::<Counter>());
    assert!(!resolver.forget_instance::<Counter>());

    let second = resolver.create::<Counter>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_is_resolvable() {
    let resolver = resolver();
    assert!(resolver.is_resolvable::<Simple>());
    assert!(!resolver.is_resolvable::<dyn ValueSource>());
    assert!(!resolver.is_resolvable::<Unregistered>());

    resolver.bind::<dyn ValueSource, Implementation>();
    assert!(resolver.is_resolvable::<dyn ValueSource>());
}

#[test]
fn test_independent_resolvers_do_not_share_state() {
    let first = resolver();
    let second = resolver();
    first.singleton::<Counter, Counter>();
    first.create::<Counter>().unwrap();

    assert!(first.has_instance::<Counter>());
    assert!(!second.has_instance::<Counter>());
    assert!(!second.has_binding::<Counter>());
}
