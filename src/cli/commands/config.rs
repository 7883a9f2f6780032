//! CLI command for `pkgstack config`

use anyhow::Result;

use super::CommandContext;

/// Print the effective configuration as TOML (or JSON with `--json`)
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let resolved = ctx.config.resolved(&ctx.dirs);

    if ctx.output.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print!("{}", resolved.to_toml()?);
    }
    Ok(())
}

/// Print the config file path
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}
