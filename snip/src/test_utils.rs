//! Shared test utilities.

use crate::errors::{Result, SnipError};
use crate::exec::CommandExecutor;
use crate::model::RunBlock;
use crate::readers::{source_lines, SourceLine};

/// Executor that records run blocks instead of spawning them.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    blocks: Vec<RunBlock>,
    fail_on: Option<(String, i32)>,
}

impl RecordingExecutor {
    /// Fails with `status` for any block whose body contains `needle`.
    pub fn failing_on(needle: &str, status: i32) -> Self {
        Self {
            blocks: Vec::new(),
            fail_on: Some((needle.to_string(), status)),
        }
    }

    /// Returns every block received, in order.
    pub fn blocks(&self) -> &[RunBlock] {
        &self.blocks
    }

    /// Returns the bodies of every block received, in order.
    pub fn bodies(&self) -> Vec<String> {
        self.blocks.iter().map(RunBlock::body).collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn name(&self) -> &str {
        "recording"
    }

    fn run(&mut self, block: &RunBlock) -> Result<()> {
        self.blocks.push(block.clone());
        match &self.fail_on {
            Some((needle, status)) if block.body().contains(needle.as_str()) => {
                Err(SnipError::RunFailure {
                    status: *status,
                    start_line: block.start_line,
                    end_line: block.end_line,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Splits a test document into numbered lines.
pub fn lines_of(doc: &str) -> Vec<SourceLine> {
    source_lines(doc.as_bytes()).collect()
}
