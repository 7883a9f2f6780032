//! CLI command for `pkgstack cache`
//!
//! Inspects, clears and prunes the package cache.

use anyhow::{bail, Result};

use super::CommandContext;
use crate::cli::output::status;
use crate::core::cache::clear_cache;
use crate::core::fetch::PackageFetcher;

/// Execute cache info subcommand
pub async fn execute_info(ctx: &CommandContext) -> Result<()> {
    let fetcher = PackageFetcher::from_config(&ctx.config, &ctx.dirs)?;
    let info = fetcher.cache_info().await;

    if ctx.output.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Namespace: {}", info.namespace);
    println!("Location: {}", info.location);
    println!("Entries: {}", info.entries);
    println!("TTL: {}s", fetcher.ttl().as_secs());

    Ok(())
}

/// Execute cache clear subcommand
///
/// Prints a report either way; exits non-zero if the clear failed.
pub async fn execute_clear(ctx: &CommandContext) -> Result<()> {
    let fetcher = PackageFetcher::from_config(&ctx.config, &ctx.dirs)?;
    let report = clear_cache(&fetcher).await;

    if ctx.output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.success {
        if !ctx.output.quiet {
            println!("{} {}", status::SUCCESS, report.message);
        }
    } else {
        println!("{} {}", status::ERROR, report.message);
    }

    if !report.success {
        bail!(
            "{}: {}",
            report.message,
            report.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

/// Execute cache cleanup subcommand
pub async fn execute_cleanup(ctx: &CommandContext) -> Result<()> {
    let fetcher = PackageFetcher::from_config(&ctx.config, &ctx.dirs)?;
    let removed = fetcher.cleanup_expired_cache().await;

    if ctx.output.json {
        println!("{}", serde_json::json!({ "removed": removed }));
    } else if !ctx.output.quiet {
        if removed > 0 {
            let noun = if removed == 1 { "entry" } else { "entries" };
            println!("{} Removed {removed} expired {noun}", status::SUCCESS);
        } else {
            println!("{} No expired entries", status::INFO);
        }
    }

    Ok(())
}
