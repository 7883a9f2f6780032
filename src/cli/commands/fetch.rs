//! CLI command for `pkgstack fetch`
//!
//! Fetches package lists for the given projects, in order.

use anyhow::Result;

use super::CommandContext;
use crate::cli::output::{create_spinner, status};
use crate::core::fetch::PackageFetcher;
use crate::core::package::ProjectPackages;

/// Execute the fetch command
pub async fn execute(ctx: &CommandContext, projects: &[String]) -> Result<()> {
    let fetcher = PackageFetcher::from_config(&ctx.config, &ctx.dirs)?;

    let results = if ctx.output.decorated() {
        let spinner = create_spinner(&format!("Fetching {} project(s)...", projects.len()));
        let pb = spinner.clone();
        let results = fetcher
            .fetch_many_with_progress(
                projects,
                Some(Box::new(move |done: usize, total: usize, project: &str| {
                    pb.set_message(format!("[{done}/{total}] {project}"));
                })),
            )
            .await;
        spinner.finish_and_clear();
        results
    } else {
        fetcher.fetch_many(projects).await
    };

    if ctx.output.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        display_project(result);
    }

    if ctx.output.decorated() {
        let empty = results.iter().filter(|r| r.packages.is_empty()).count();
        println!();
        if empty == 0 {
            println!("{} Fetched {} project(s)", status::SUCCESS, results.len());
        } else {
            println!(
                "{} Fetched {} project(s), {} without packages (unknown or failed; see -v)",
                status::WARNING,
                results.len(),
                empty
            );
        }
    }

    Ok(())
}

fn display_project(result: &ProjectPackages) {
    match result.newest_version() {
        Some(newest) => println!(
            "{} ({} packages, newest {newest})",
            result.project,
            result.packages.len()
        ),
        None => println!("{} ({} packages)", result.project, result.packages.len()),
    }

    let repo_width = result
        .packages
        .iter()
        .map(|p| p.repo.len())
        .max()
        .unwrap_or(0);

    for package in &result.packages {
        println!(
            "  {:<repo_width$}  {:<12}  {}",
            package.repo, package.version, package.status
        );
    }
}
