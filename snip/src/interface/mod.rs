//! High-level interface for tangle operations.

mod context;
mod document;
mod tangler;

pub use context::Context;
pub use document::{
    extract_program, tangle_documents, tangle_file, tangle_files, tangle_with, Document,
};
pub use tangler::{TangleReport, Tangler};
