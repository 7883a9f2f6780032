//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Cache file the default namespace lands in
#[allow(dead_code)]
pub const CACHE_FILE: &str = "repology-packages.json";

/// Isolated environment for running the pkgstack binary
///
/// Cache and config directories live in a temporary directory so tests
/// never touch the user's real state.
pub struct TestEnv {
    /// Temporary directory holding cache and config directories
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new environment in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Cache directory passed through `PKGSTACK_CACHE_DIR`
    pub fn cache_dir(&self) -> PathBuf {
        self.dir.path().join("cache")
    }

    /// Config directory passed through `PKGSTACK_CONFIG_DIR`
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Path of the default namespace's cache file
    #[allow(dead_code)]
    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir().join(CACHE_FILE)
    }

    /// Write `config.toml` into the config directory
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        let dir = self.config_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Read the cache file as JSON
    #[allow(dead_code)]
    pub fn read_cache(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.cache_file()).expect("Failed to read cache");
        serde_json::from_str(&content).expect("Cache file is not valid JSON")
    }

    /// Blocking command with the isolated environment applied
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pkgstack"));
        cmd.env("PKGSTACK_CACHE_DIR", self.cache_dir())
            .env("PKGSTACK_CONFIG_DIR", self.config_dir())
            .env_remove("PKGSTACK_CONFIG")
            .env_remove("PKGSTACK_CATALOG_URL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Async command with the isolated environment applied
    ///
    /// Use this from `#[tokio::test]` so a mock server keeps serving
    /// while the binary runs.
    #[allow(dead_code)]
    pub fn async_command(&self) -> tokio::process::Command {
        tokio::process::Command::from(self.command())
    }

    /// Run pkgstack with the given arguments and wait for it
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> std::process::Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute pkgstack")
    }

    /// Run pkgstack asynchronously with the given arguments
    #[allow(dead_code)]
    pub async fn run_async(&self, args: &[&str]) -> std::process::Output {
        self.async_command()
            .args(args)
            .output()
            .await
            .expect("Failed to execute pkgstack")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout as a string
#[allow(dead_code)]
pub fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string
#[allow(dead_code)]
pub fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Sample catalog response for one project
#[allow(dead_code)]
pub const SAMPLE_PROJECT_JSON: &str = r#"[
  {
    "repo": "alpine_3_20",
    "srcname": "zlib",
    "binname": "zlib",
    "visiblename": "zlib",
    "version": "1.3.1",
    "summary": "A compression/decompression library",
    "status": "newest",
    "licenses": ["Zlib"]
  },
  {
    "repo": "debian_12",
    "visiblename": "zlib",
    "version": "1.2.13",
    "status": "outdated",
    "licenses": []
  }
]"#;
