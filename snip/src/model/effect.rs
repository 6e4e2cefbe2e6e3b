//! Side-effect requests produced by the state machine.

use super::run_block::RunBlock;

/// How an output file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or truncate.
    Truncate,
    /// Create if absent, keep existing content.
    Append,
}

impl WriteMode {
    pub fn from_append(append: bool) -> Self {
        if append {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        }
    }
}

/// A side effect requested while stepping through one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open an output file at the start of a file block.
    Open { name: String, mode: WriteMode },
    /// Write one line of raw bytes (a newline is added by the sink).
    Write { name: String, text: Vec<u8> },
    /// Close the output file at the end of its block.
    Close { name: String },
    /// Execute (or preview) a completed run block.
    Run(RunBlock),
}

impl Effect {
    /// Returns a description of this effect.
    pub fn describe(&self) -> String {
        match self {
            Effect::Open { name, mode } => match mode {
                WriteMode::Truncate => format!("create {}", name),
                WriteMode::Append => format!("append {}", name),
            },
            Effect::Write { name, .. } => format!("write {}", name),
            Effect::Close { name } => format!("close {}", name),
            Effect::Run(block) => format!(
                "run lines {}-{}",
                block.start_line, block.end_line
            ),
        }
    }
}
