//! Config command implementation.

use snip::errors::{Result, SnipError};
use snip::interface::Context;

/// Prints the configuration in effect for the context directory.
pub fn config(ctx: &Context) -> Result<()> {
    print!("{}", render(ctx)?);
    Ok(())
}

/// Serializes the resolved configuration, headed by the directory it applies to.
fn render(ctx: &Context) -> Result<String> {
    let body = toml::to_string_pretty(&ctx.config)
        .map_err(|e| SnipError::Config(format!("cannot serialize configuration: {}", e)))?;
    Ok(format!("# snip configuration for {}\n{}", ctx.base_dir.display(), body))
}
