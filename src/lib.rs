//! pkgstack - cached, rate-limited package metadata from Repology
//!
//! Fetches per-project package lists from the catalog while keeping a
//! durable, expiring cache so repeated runs stay off the network.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Fetch orchestration, package records and configuration
//! - [`cache`] - Durable TTL cache with swappable persistence backends
//! - [`registry`] - Catalog HTTP client and rate limiter
//! - [`infra`] - Infrastructure layer (filesystem, platform directories)
//! - [`config`] - Configuration defaults and URLs
//! - [`error`] - Error types and handling

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod registry;

#[cfg(test)]
pub mod test_utils;
