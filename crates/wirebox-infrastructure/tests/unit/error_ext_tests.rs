//! Tests for error context helpers

use std::error::Error as _;
use std::io;

use wirebox_domain::Error;
use wirebox_infrastructure::error_ext::ErrorContext;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_as_infrastructure_error() {
    match failing().context("Loading file") {
        Err(Error::Infrastructure { message, source }) => {
            assert_eq!(message, "Loading file: missing");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let err = failing().with_context(|| format!("attempt {}", 2)).unwrap_err();
    assert_eq!(err.to_string(), "Infrastructure error: attempt 2: missing");
}

#[test]
fn test_config_context_wraps_as_configuration_error() {
    let err = failing().config_context("Reading wirebox.toml").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("missing"));
}
