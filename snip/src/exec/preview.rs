//! Rendering run blocks without executing them.

use std::io::{self, Write};

use super::CommandExecutor;
use crate::errors::Result;
use crate::model::RunBlock;

/// Prints run block bodies instead of executing them.
pub struct PreviewExecutor<W = io::Stdout> {
    indent: usize,
    out: W,
}

impl PreviewExecutor<io::Stdout> {
    /// Creates a previewer writing to stdout.
    pub fn new(indent: usize) -> Self {
        Self::with_writer(indent, io::stdout())
    }
}

impl<W: Write> PreviewExecutor<W> {
    /// Creates a previewer writing to the given writer.
    pub fn with_writer(indent: usize, out: W) -> Self {
        Self { indent, out }
    }

    /// Consumes the previewer, returning its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> std::fmt::Debug for PreviewExecutor<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewExecutor")
            .field("indent", &self.indent)
            .finish()
    }
}

impl<W: Write> CommandExecutor for PreviewExecutor<W> {
    fn name(&self) -> &str {
        "preview"
    }

    fn run(&mut self, block: &RunBlock) -> Result<()> {
        tracing::debug!(
            "Previewing lines {}-{}",
            block.start_line,
            block.end_line
        );
        self.out
            .write_all(block.render_preview(self.indent).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
