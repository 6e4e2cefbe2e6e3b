//! Line classification for the blockquote annotation grammar.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, SnipError};
use crate::model::ParserState;
use crate::text_location::TextLocation;

use super::types::SourceLine;

/// Quoted fence: exactly three backticks, then an optional tag.
static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^> ```(?:[^`].*)?$").unwrap());

/// File header shape: `> File` followed by anything.
static FILE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^> File(?:\s+(?P<rest>.*))?$").unwrap());

/// First backtick-delimited span.
static BACKTICK_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(?P<name>[^`]+)`").unwrap());

/// Run header.
static RUN_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^> Run\s*$").unwrap());

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `> File `name`` header.
    FileOpen(String),
    /// `> File `name` continued` header.
    FileContinue(String),
    /// `> Run` header.
    RunDeclare,
    /// Quoted three-backtick fence, opening or closing.
    FenceToggle,
    /// Quoted line inside a fence, marker and one space stripped.
    /// The bytes are kept exactly as they appear in the document.
    QuotedContent(Vec<u8>),
    /// Line outside the blockquote grammar; ends the current block.
    Unquoted,
    /// Line that cannot appear in the current state.
    MalformedQuote,
}

/// Classifies lines against the current parser state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier {
    /// Treat unannotated blockquotes outside any block as prose.
    pub lenient_blockquotes: bool,
}

impl LineClassifier {
    /// Creates a classifier.
    pub fn new(lenient_blockquotes: bool) -> Self {
        Self {
            lenient_blockquotes,
        }
    }

    /// Returns the single classification for `line` under `state`.
    ///
    /// A file header without a backtick-quoted name is an error.
    pub fn classify(&self, line: &SourceLine, state: &ParserState) -> Result<LineKind> {
        let text = line.content.as_str();

        if !text.starts_with('>') {
            if state.in_fence() {
                return Ok(LineKind::MalformedQuote);
            }
            return Ok(LineKind::Unquoted);
        }

        if FENCE.is_match(text) {
            return Ok(LineKind::FenceToggle);
        }

        if state.in_fence() {
            return Ok(LineKind::QuotedContent(strip_quote(&line.raw).to_vec()));
        }

        if RUN_HEADER.is_match(text) {
            return Ok(LineKind::RunDeclare);
        }

        if let Some(caps) = FILE_HEADER.captures(text) {
            let rest = caps.name("rest").map_or("", |m| m.as_str());
            let Some(span) = BACKTICK_SPAN.captures(rest) else {
                return Err(SnipError::MissingHeaderParameter {
                    location: TextLocation::line_only(line.number),
                });
            };
            let name = span["name"].to_string();
            let after = &rest[span.get(0).map_or(rest.len(), |m| m.end())..];
            return Ok(if after.trim() == "continued" {
                LineKind::FileContinue(name)
            } else {
                LineKind::FileOpen(name)
            });
        }

        if self.lenient_blockquotes && !state.has_context() {
            return Ok(LineKind::Unquoted);
        }

        Ok(LineKind::MalformedQuote)
    }
}

/// Removes the `>` marker and at most one following space.
pub fn strip_quote(raw: &[u8]) -> &[u8] {
    let rest = raw.strip_prefix(b">").unwrap_or(raw);
    rest.strip_prefix(b" ").unwrap_or(rest)
}
