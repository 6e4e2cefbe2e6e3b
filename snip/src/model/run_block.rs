//! A completed run block ready for execution.

use crate::readers::SourceLine;

/// The body of a run block together with the fences that delimit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunBlock {
    /// Line number of the opening fence.
    pub start_line: usize,
    /// Line number of the closing fence.
    pub end_line: usize,
    /// Content lines with their original line numbers.
    pub lines: Vec<SourceLine>,
}

impl RunBlock {
    /// Creates a new run block.
    pub fn new(start_line: usize, end_line: usize, lines: Vec<SourceLine>) -> Self {
        Self {
            start_line,
            end_line,
            lines,
        }
    }

    /// The command text handed to the interpreter: lines joined by `\n`.
    pub fn body(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The body as raw bytes, lines joined by `\n`.
    pub fn raw_body(&self) -> Vec<u8> {
        self.lines
            .iter()
            .map(|l| l.raw.as_slice())
            .collect::<Vec<_>>()
            .join(&b'\n')
    }

    /// Renders the body for inspection, one indented line per buffered line.
    pub fn render_preview(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&pad);
            out.push_str(&line.content);
            out.push('\n');
        }
        out
    }

    /// Renders the diagnostic printed when the block exits with `status`.
    ///
    /// Each line is prefixed with its line number in the source document.
    pub fn render_failure(&self, status: i32) -> String {
        let mut out = format!(
            "run block at lines {}-{} failed with exit status {}\n",
            self.start_line, self.end_line, status
        );
        for line in &self.lines {
            out.push_str(&format!("{:>5} | {}\n", line.number, line.content));
        }
        out
    }
}
