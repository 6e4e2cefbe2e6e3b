//! Scissor range extraction.
//!
//! A document that carries its own tangler marks the real program text
//! with scissor lines. Only the lines strictly between a start and an end
//! marker form the program; everything else is discarded.

use regex::Regex;

use crate::config::ScissorMarkers;
use crate::errors::{Result, SnipError};
use crate::text_location::TextLocation;

use super::types::{join_lines, source_lines, SourceLine};

/// Extracts the lines enclosed by scissor markers.
#[derive(Debug, Clone)]
pub struct ScissorExtractor {
    start: Regex,
    end: Regex,
}

impl ScissorExtractor {
    /// Creates an extractor for the given marker shapes.
    pub fn new(markers: &ScissorMarkers) -> Result<Self> {
        let (start, end) = markers.compile()?;
        Ok(Self { start, end })
    }

    /// Collects the lines of every range, in order, markers excluded.
    ///
    /// Returns `None` when the document has no scissor markers at all.
    /// Ranges alternate strictly; an end marker outside a range or a range
    /// still open at the end of input is malformed source. Inside a range,
    /// a repeated start marker closes it just like an end marker.
    pub fn extract(&self, input: impl AsRef<[u8]>) -> Result<Option<Vec<SourceLine>>> {
        let mut open_at: Option<usize> = None;
        let mut found = false;
        let mut program = Vec::new();

        for line in source_lines(input.as_ref()) {
            let is_start = self.start.is_match(&line.content);
            let is_end = self.end.is_match(&line.content);

            match open_at {
                None if is_start => {
                    open_at = Some(line.number);
                    found = true;
                }
                None if is_end => {
                    return Err(SnipError::malformed(
                        line.number,
                        "scissor end marker without a matching start",
                    ));
                }
                None => {}
                Some(_) if is_start || is_end => open_at = None,
                Some(_) => program.push(line),
            }
        }

        if let Some(line) = open_at {
            return Err(SnipError::UnterminatedScissors {
                location: TextLocation::line_only(line),
            });
        }

        Ok(found.then_some(program))
    }

    /// Like [`extract`](Self::extract), but returns the concatenated text.
    pub fn extract_text(&self, input: impl AsRef<[u8]>) -> Result<Option<String>> {
        Ok(self.extract(input)?.map(|lines| join_lines(&lines)))
    }

    /// Returns the effective program: the scissor ranges if any exist,
    /// otherwise the whole document.
    pub fn program_lines(&self, input: impl AsRef<[u8]>) -> Result<Vec<SourceLine>> {
        let input = input.as_ref();
        match self.extract(input)? {
            Some(lines) => {
                tracing::debug!("Using {} lines from scissor ranges", lines.len());
                Ok(lines)
            }
            None => Ok(source_lines(input).collect()),
        }
    }
}
