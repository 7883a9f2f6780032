//! Integration tests for `pkgstack cache`
//!
//! Covers info, clear and cleanup against a seeded cache file.

mod common;

use common::{stderr, stdout, TestEnv};
use serde_json::json;

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

/// One fresh and one long-expired entry
fn seed_cache(env: &TestEnv) {
    let now = now_millis();
    let snapshot = json!({
        "project:zlib": {
            "data": [{"repo": "arch", "version": "1.3.1", "status": "newest"}],
            "timestamp": now,
            "ttl": 43_200_000u64
        },
        "project:old": {
            "data": [],
            "timestamp": now - 10_000,
            "ttl": 1_000u64
        }
    });
    std::fs::create_dir_all(env.cache_dir()).unwrap();
    std::fs::write(
        env.cache_file(),
        serde_json::to_string_pretty(&snapshot).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_cache_info_on_empty_cache() {
    let env = TestEnv::new();
    let output = env.run(&["--json", "cache", "info"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let info: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(info["namespace"], "repology-packages");
    assert_eq!(info["entries"], 0);
    assert!(info["location"]
        .as_str()
        .unwrap()
        .ends_with("repology-packages.json"));
}

#[test]
fn test_cache_info_counts_only_live_entries() {
    let env = TestEnv::new();
    seed_cache(&env);

    let output = env.run(&["--json", "cache", "info"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let info: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(info["entries"], 1);
}

#[test]
fn test_cache_info_human_output() {
    let env = TestEnv::new();
    let output = env.run(&["cache", "info"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Namespace: repology-packages"));
    assert!(out.contains("TTL: 43200s"));
}

#[test]
fn test_cache_clear_reports_success_and_empties_file() {
    let env = TestEnv::new();
    seed_cache(&env);

    let output = env.run(&["--json", "cache", "clear"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["message"], "Cache cleared successfully");
    assert!(report.get("error").is_none());

    assert_eq!(env.read_cache(), json!({}));
}

#[test]
fn test_cache_cleanup_removes_expired_entries() {
    let env = TestEnv::new();
    seed_cache(&env);

    let output = env.run(&["--json", "cache", "cleanup"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["removed"], 1);

    let cache = env.read_cache();
    assert!(cache.get("project:old").is_none());
    assert!(cache.get("project:zlib").is_some());
}

#[test]
fn test_cache_cleanup_without_expired_entries_leaves_no_file() {
    let env = TestEnv::new();

    let output = env.run(&["cache", "cleanup"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No expired entries"));
    assert!(!env.cache_file().exists());
}

#[test]
fn test_corrupt_cache_file_is_cold_start() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.cache_dir()).unwrap();
    std::fs::write(env.cache_file(), "{ not json").unwrap();

    let output = env.run(&["--json", "cache", "info"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let info: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(info["entries"], 0);
}

#[test]
fn test_invalid_namespace_is_rejected() {
    let env = TestEnv::new();
    env.write_config("[cache]\nnamespace = \"../escape\"\n");

    let output = env.run(&["cache", "info"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("namespace"));
}
