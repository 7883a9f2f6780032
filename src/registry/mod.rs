//! Package catalog access
//!
//! HTTP client for the catalog and the rate limiter that paces it.

pub mod client;
pub mod rate_limit;

pub use client::CatalogClient;
pub use rate_limit::RateLimiter;
