//! Core business logic module
//!
//! # Submodules
//!
//! - [`package`] - Package records returned by the catalog
//! - [`fetch`] - Cached, rate-limited fetch orchestration
//! - [`cache`] - Cache administration reports
//! - [`global_config`] - Global configuration management

pub mod cache;
pub mod fetch;
pub mod global_config;
pub mod package;
