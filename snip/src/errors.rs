//! Error types for the snip engine.

use std::path::PathBuf;
use thiserror::Error;

use crate::text_location::TextLocation;

/// Main error type for tangle operations.
#[derive(Error, Debug)]
pub enum SnipError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Malformed source at {location}: {message}")]
    MalformedSource {
        location: TextLocation,
        message: String,
    },

    #[error("Malformed source at {location}: file header has no `name`")]
    MissingHeaderParameter { location: TextLocation },

    #[error("Malformed source at {location}: scissor range is never closed")]
    UnterminatedScissors { location: TextLocation },

    #[error("Malformed source at {location}: fence is never closed")]
    UnterminatedFence { location: TextLocation },

    #[error("Run block at lines {start_line}-{end_line} failed with exit status {status}")]
    RunFailure {
        status: i32,
        start_line: usize,
        end_line: usize,
    },

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error for {path}: {message}")]
    Sink { path: PathBuf, message: String },

    #[error("{0}")]
    Other(String),
}

impl SnipError {
    /// Creates a malformed-source error at a line.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedSource {
            location: TextLocation::line_only(line),
            message: message.into(),
        }
    }

    /// Returns true for the malformed-source family of errors.
    pub fn is_malformed_source(&self) -> bool {
        matches!(
            self,
            Self::MalformedSource { .. }
                | Self::MissingHeaderParameter { .. }
                | Self::UnterminatedScissors { .. }
                | Self::UnterminatedFence { .. }
        )
    }

    /// Returns the source location for parse errors.
    pub fn location(&self) -> Option<&TextLocation> {
        match self {
            Self::MalformedSource { location, .. }
            | Self::MissingHeaderParameter { location }
            | Self::UnterminatedScissors { location }
            | Self::UnterminatedFence { location } => Some(location),
            _ => None,
        }
    }

    /// Attaches a document path to the location of a parse error.
    pub fn in_document(mut self, path: PathBuf) -> Self {
        match &mut self {
            Self::MalformedSource { location, .. }
            | Self::MissingHeaderParameter { location }
            | Self::UnterminatedScissors { location }
            | Self::UnterminatedFence { location } => {
                if location.filename.is_none() {
                    location.filename = Some(path);
                }
            }
            _ => {}
        }
        self
    }

    /// Process exit status for this error.
    ///
    /// A failed run block propagates the child's own status; everything
    /// else exits with 1.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::RunFailure { status, .. } => match u8::try_from(*status) {
                Ok(0) | Err(_) => 1,
                Ok(code) => code,
            },
            _ => 1,
        }
    }
}

/// Result type alias for tangle operations.
pub type Result<T> = std::result::Result<T, SnipError>;
