//! Integration tests for `pkgstack fetch`
//!
//! Runs the binary against a mock catalog and checks ordering,
//! failure handling and persistence across invocations.

mod common;

use common::{stderr, stdout, TestEnv, SAMPLE_PROJECT_JSON};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_project(server: &MockServer, project: &str, body: &str, expect: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/project/{project}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .expect(expect)
        .mount(server)
        .await;
}

fn fetch_args<'a>(url: &'a str, projects: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["--json", "--rate", "50", "--catalog-url", url, "fetch"];
    args.extend_from_slice(projects);
    args
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_json_preserves_input_order() {
    let server = MockServer::start().await;
    mount_project(&server, "zlib", SAMPLE_PROJECT_JSON, 1).await;
    mount_project(&server, "curl", r#"[{"repo":"arch","version":"8.9.1","status":"newest"}]"#, 1)
        .await;

    let env = TestEnv::new();
    let url = server.uri();
    let output = env.run_async(&fetch_args(&url, &["curl", "zlib"])).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let results: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["project"], "curl");
    assert_eq!(results[1]["project"], "zlib");
    assert_eq!(results[1]["packages"].as_array().unwrap().len(), 2);
    assert_eq!(results[1]["packages"][0]["visiblename"], "zlib");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_second_run_served_from_disk() {
    let server = MockServer::start().await;
    // Only the first process may reach the catalog
    mount_project(&server, "zlib", SAMPLE_PROJECT_JSON, 1).await;

    let env = TestEnv::new();
    let url = server.uri();

    let first = env.run_async(&fetch_args(&url, &["zlib"])).await;
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    assert!(env.cache_file().exists());

    let cache = env.read_cache();
    let entry = &cache["project:zlib"];
    assert_eq!(entry["ttl"], 43_200_000);
    assert!(entry["timestamp"].as_u64().unwrap() > 0);
    assert_eq!(entry["data"].as_array().unwrap().len(), 2);

    let second = env.run_async(&fetch_args(&url, &["zlib"])).await;
    assert!(second.status.success(), "stderr: {}", stderr(&second));
    assert_eq!(stdout(&first), stdout(&second));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_failure_yields_empty_list_and_is_not_cached() {
    let server = MockServer::start().await;
    mount_project(&server, "zlib", SAMPLE_PROJECT_JSON, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/project/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    let url = server.uri();

    for _ in 0..2 {
        let output = env.run_async(&fetch_args(&url, &["broken", "zlib"])).await;
        assert!(output.status.success(), "stderr: {}", stderr(&output));

        let results: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(results[0]["project"], "broken");
        assert!(results[0]["packages"].as_array().unwrap().is_empty());
        assert_eq!(results[1]["packages"].as_array().unwrap().len(), 2);
    }

    let cache = env.read_cache();
    assert!(cache.get("project:broken").is_none());
    assert!(cache.get("project:zlib").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_human_output_lists_repositories() {
    let server = MockServer::start().await;
    mount_project(&server, "zlib", SAMPLE_PROJECT_JSON, 1).await;

    let env = TestEnv::new();
    let url = server.uri();
    let output = env
        .run_async(&["--quiet", "--catalog-url", &url, "fetch", "zlib"])
        .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("zlib (2 packages, newest 1.3.1)"), "stdout: {out}");
    assert!(out.contains("alpine_3_20"));
    assert!(out.contains("debian_12"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_uses_config_file_ttl() {
    let server = MockServer::start().await;
    mount_project(&server, "zlib", SAMPLE_PROJECT_JSON, 1).await;

    let env = TestEnv::new();
    env.write_config("[cache]\nttl = 60\n");
    let url = server.uri();

    let output = env.run_async(&fetch_args(&url, &["zlib"])).await;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(env.read_cache()["project:zlib"]["ttl"], 60_000);
}

#[test]
fn test_fetch_without_projects_is_usage_error() {
    let env = TestEnv::new();
    let output = env.run(&["fetch"]);
    assert!(!output.status.success());
}
