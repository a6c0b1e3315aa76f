//! Integration tests for the spec cache and the environment boundary.

use serial_test::serial;

use adogen::cache::SpecCache;
use adogen::config;

#[test]
fn test_cache_key_includes_every_component() {
    let root = tempfile::tempdir().unwrap();
    let cache = SpecCache::new(root.path().to_path_buf(), true);
    let doc = r#"{"openapi": "3.0.1", "info": {"title": "Build"}}"#;
    cache.put("master", "build", "7.1", "build.json", doc).unwrap();

    assert_eq!(cache.get("master", "build", "7.1", "build.json").as_deref(), Some(doc));
    // Any differing key component is a miss.
    assert!(cache.get("main", "build", "7.1", "build.json").is_none());
    assert!(cache.get("master", "git", "7.1", "build.json").is_none());
    assert!(cache.get("master", "build", "7.0", "build.json").is_none());
    assert!(cache.get("master", "build", "7.1", "builds.json").is_none());

    // Entries land where the next run expects them on disk.
    assert!(root
        .path()
        .join("master")
        .join("build")
        .join("7.1")
        .join("build.json")
        .is_file());
}

#[test]
fn test_disabled_cache_skips_reads_and_writes() {
    let root = tempfile::tempdir().unwrap();
    let cache = SpecCache::new(root.path().to_path_buf(), false);
    cache.put("master", "build", "7.1", "build.json", "{}").unwrap();

    assert!(cache.get("master", "build", "7.1", "build.json").is_none());
    assert!(!root.path().join("master").exists(), "disabled cache must not write");
}

#[test]
fn test_overwrite_refreshes_entry() {
    let root = tempfile::tempdir().unwrap();
    let cache = SpecCache::new(root.path().to_path_buf(), true);
    cache.put("master", "core", "7.1", "core.json", r#"{"v": 1}"#).unwrap();
    cache.put("master", "core", "7.1", "core.json", r#"{"v": 2}"#).unwrap();

    assert_eq!(
        cache.get("master", "core", "7.1", "core.json").as_deref(),
        Some(r#"{"v": 2}"#)
    );
}

#[test]
#[serial]
fn test_token_from_env_boundary() {
    std::env::remove_var(config::TOKEN_ENV_VAR);
    assert_eq!(config::token_from_env(), None);

    std::env::set_var(config::TOKEN_ENV_VAR, "");
    assert_eq!(config::token_from_env(), None, "empty token counts as absent");

    std::env::set_var(config::TOKEN_ENV_VAR, "ghp_example");
    assert_eq!(config::token_from_env(), Some("ghp_example".to_string()));

    std::env::remove_var(config::TOKEN_ENV_VAR);
}
