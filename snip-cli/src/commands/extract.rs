//! Extract command implementation.

use std::path::Path;

use snip::errors::Result;
use snip::interface::{extract_program, Context};

/// Prints the effective program text of a document.
///
/// For a document with scissor ranges this is the text between the
/// markers; otherwise it is the whole document.
pub fn extract(ctx: &Context, path: &Path) -> Result<()> {
    let program = extract_program(ctx, path)?;
    print!("{}", program);
    Ok(())
}
