//! Configuration from the environment and the command line.
//!
//! Tests touching process environment variables run with `#[serial]`.

use std::env;
use std::path::PathBuf;

use bookdeck::cli::{parse_args, CliCommand};
use bookdeck::config::{
    ConfigError, DashboardConfig, StoreBackend, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_LOG_FILE,
    ENV_SNAPSHOT, ENV_STORE, ENV_TIMEOUT_SECS,
};
use bookdeck::store::build_store;
use serial_test::serial;

const ALL_VARS: [&str; 5] = [ENV_STORE, ENV_API_URL, ENV_SNAPSHOT, ENV_TIMEOUT_SECS, ENV_LOG_FILE];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

fn overrides(args: &[&str]) -> bookdeck::cli::CliOverrides {
    let mut all = vec!["bookdeck".to_string()];
    all.extend(args.iter().map(|s| s.to_string()));
    match parse_args(all.into_iter()) {
        Ok(CliCommand::Run(overrides)) => overrides,
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = DashboardConfig::from_env().unwrap();

    assert_eq!(config.backend, StoreBackend::Remote);
    assert!(config.api_url.starts_with("https://"));
    assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert!(config.refresh_after_mutation());
    assert!(config.log_path().ends_with("bookdeck.log"));
}

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    clear_env();
    env::set_var(ENV_STORE, "memory");
    env::set_var(ENV_SNAPSHOT, "/tmp/books.json");
    env::set_var(ENV_TIMEOUT_SECS, "3");
    env::set_var(ENV_LOG_FILE, "/tmp/bookdeck-test.log");

    let config = DashboardConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.backend, StoreBackend::Memory);
    assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/books.json")));
    assert_eq!(config.request_timeout_secs, 3);
    assert_eq!(config.log_path(), PathBuf::from("/tmp/bookdeck-test.log"));
    assert!(!config.refresh_after_mutation());
}

#[test]
#[serial]
fn test_invalid_environment_value_is_reported() {
    clear_env();
    env::set_var(ENV_TIMEOUT_SECS, "soon");
    let result = DashboardConfig::from_env();
    clear_env();

    assert_eq!(
        result,
        Err(ConfigError::InvalidValue {
            var: ENV_TIMEOUT_SECS,
            value: "soon".to_string(),
        })
    );
}

#[test]
#[serial]
fn test_empty_environment_value_is_unset() {
    clear_env();
    env::set_var(ENV_API_URL, "  ");
    let config = DashboardConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_url, DashboardConfig::default().api_url);
}

#[test]
#[serial]
fn test_command_line_wins_over_environment() {
    clear_env();
    env::set_var(ENV_STORE, "memory");
    env::set_var(ENV_API_URL, "https://env.test/books");
    let config = DashboardConfig::from_env().unwrap();
    clear_env();

    let config = overrides(&["--remote", "--url", "https://cli.test/books", "--no-refresh"])
        .apply(config);

    assert_eq!(config.backend, StoreBackend::Remote);
    assert_eq!(config.api_url, "https://cli.test/books");
    assert!(!config.refresh_after_mutation());
}

#[test]
fn test_snapshot_flag_selects_memory_store() {
    let config = overrides(&["--snapshot=/tmp/catalog.json"]).apply(DashboardConfig::new());
    assert_eq!(config.backend, StoreBackend::Memory);
    assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/catalog.json")));
}

#[tokio::test]
async fn test_build_store_from_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        r#"[{"id":"a","title":"Emma","author":"Jane Austen","genre":"Romance","publishedYear":1815,"status":"Available"}]"#,
    )
    .unwrap();

    let config = overrides(&["--snapshot", path.to_str().unwrap()]).apply(DashboardConfig::new());
    let store = build_store(&config).unwrap();

    let books = store.list().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Emma");
    assert_eq!(store.describe(), "in-memory");
}

#[test]
fn test_build_store_for_remote_url() {
    let config = DashboardConfig::new().with_api_url("https://api.test/books/");
    let store = build_store(&config).unwrap();
    assert_eq!(store.describe(), "https://api.test/books");
}
