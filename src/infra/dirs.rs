//! Platform-specific directory management
//!
//! Provides platform-specific paths for the cache and config directories.
//! Follows XDG Base Directory Specification on Linux and standard locations on macOS.
//!
//! Environment variables can override default directories:
//! - `PKGSTACK_CACHE_DIR` - Override cache directory
//! - `PKGSTACK_CONFIG_DIR` - Override config directory

use std::env;
use std::path::PathBuf;

/// Environment variable names for directory overrides
pub const ENV_CACHE_DIR: &str = "PKGSTACK_CACHE_DIR";
pub const ENV_CONFIG_DIR: &str = "PKGSTACK_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "pkgstack";

/// Platform-specific directory provider for pkgstack
#[derive(Debug, Clone)]
pub struct PkgstackDirs {
    cache_dir: PathBuf,
    config_dir: PathBuf,
}

impl PkgstackDirs {
    /// Create a new `PkgstackDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache_dir: Self::resolve_cache_dir(),
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Create an instance rooted at explicit directories
    #[must_use]
    pub fn with_dirs(cache_dir: PathBuf, config_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            config_dir,
        }
    }

    /// Get the cache directory path
    ///
    /// Holds one snapshot file per cache namespace.
    /// - Linux: `$XDG_CACHE_HOME/pkgstack` or `~/.cache/pkgstack`
    /// - macOS: `~/Library/Caches/pkgstack`
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone()
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/pkgstack` or `~/.config/pkgstack`
    /// - macOS: `~/Library/Application Support/pkgstack`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    fn resolve_cache_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CACHE_DIR) {
            return PathBuf::from(path);
        }

        dirs::cache_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".cache").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".cache").join(APP_NAME))
            })
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for PkgstackDirs {
    fn default() -> Self {
        Self::new()
    }
}
