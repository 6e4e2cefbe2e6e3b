//! Readers for splitting documents into classified lines.

mod classify;
mod scissors;
mod types;

pub use classify::{strip_quote, LineClassifier, LineKind};
pub use scissors::ScissorExtractor;
pub use types::{join_lines, source_lines, SourceLine};
