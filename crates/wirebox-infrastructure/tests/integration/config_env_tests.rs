//! Environment variable overrides
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p wirebox-infrastructure --test integration config_env -- --test-threads=1 --ignored
//! ```

use std::env;

use tempfile::TempDir;
use wirebox_infrastructure::config::ConfigLoader;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wirebox.toml");
    std::fs::write(&path, "[resolver]\nmax_depth = 9\n").unwrap();
    set_env("WIREBOX_ENV_TEST_RESOLVER__MAX_DEPTH", "5");
    set_env("WIREBOX_ENV_TEST_LOGGING__JSON_FORMAT", "true");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("WIREBOX_ENV_TEST")
        .load()
        .unwrap();

    assert_eq!(config.resolver.max_depth, 5);
    assert!(config.logging.json_format);

    remove_env("WIREBOX_ENV_TEST_RESOLVER__MAX_DEPTH");
    remove_env("WIREBOX_ENV_TEST_LOGGING__JSON_FORMAT");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_value_is_validated() {
    let dir = TempDir::new().unwrap();
    set_env("WIREBOX_ENV_TEST_RESOLVER__MAX_DEPTH", "0");

    let result = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("WIREBOX_ENV_TEST")
        .load();
    assert!(result.is_err());

    remove_env("WIREBOX_ENV_TEST_RESOLVER__MAX_DEPTH");
}
