//! Snip - Literate Tangling Engine
//!
//! This library tangles documents that mix prose with blockquoted,
//! annotated code blocks. A `> File` header naming a file and followed by a quoted
//! fence writes the fence content to that file; a `> Run` header followed by
//! a quoted fence executes the content through the shell when the fence
//! closes. Everything happens in document order, in a single pass.
//!
//! # Features
//!
//! - **File blocks**: materialize output files, truncating or (with
//!   `continued`) appending
//! - **Run blocks**: execute multi-line shell bodies, aborting on failure
//! - **Scissors**: restrict a self-hosting document to its marked program ranges
//! - **Preview**: render run blocks without executing or writing anything
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use snip::interface::{tangle_file, Context};
//!
//! let ctx = Context::from_current_dir().unwrap();
//! let report = tangle_file(&ctx, Path::new("BUILD.md")).unwrap();
//! println!("{} run blocks", report.runs);
//! ```

pub mod config;
pub mod errors;
pub mod exec;
pub mod interface;
pub mod io;
pub mod machine;
pub mod mode;
pub mod model;
pub mod readers;
pub mod text_location;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Result, SnipError};
pub use interface::{Context, TangleReport, Tangler};
pub use mode::Mode;
pub use model::{Effect, ParserState, RunBlock, RunState};
pub use readers::{LineKind, SourceLine};
