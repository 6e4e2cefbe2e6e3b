//! Init command implementation.

use std::path::Path;

use snip::errors::{Result, SnipError};

const DEFAULT_CONFIG: &str = r##"# Documents tangled when `snip tangle` is given no files
source_patterns = ["BUILD.md"]

# Options: "execute" (default), "preview"
mode = "execute"

# Indentation of run blocks printed in preview mode
preview_indent = 4

# Treat blockquotes outside File/Run blocks as prose instead of an error
lenient_blockquotes = false

# Scissor lines: <dashes> dashes, glyph, <dashes> dashes
[scissors]
dashes = 8
start = "8<"
end = ">8"

# Interpreter receiving each run block as its final argument
# [shell]
# program = "bash"
# args = ["-e", "-c"]
"##;

/// Executes the init command.
pub fn init(base_dir: &Path) -> Result<()> {
    let config_path = base_dir.join("snip.toml");

    if config_path.exists() {
        return Err(SnipError::Config(format!(
            "{} already exists",
            config_path.display()
        )));
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created {}", config_path.display());
    Ok(())
}
