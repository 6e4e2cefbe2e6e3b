//! Document-level tangle operations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, SnipError};
use crate::exec::{CommandExecutor, PreviewExecutor, ShellExecutor};
use crate::io::{FileSink, FsSink, VirtualSink};
use crate::readers::{join_lines, ScissorExtractor, SourceLine};

use super::context::Context;
use super::tangler::{TangleReport, Tangler};

/// A document loaded for tangling.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path to the source document.
    pub path: PathBuf,
    /// Effective program lines (scissor ranges, or the whole text).
    pub program: Vec<SourceLine>,
}

impl Document {
    /// Loads a document from a file.
    ///
    /// The file is read as bytes; it does not have to be valid UTF-8.
    pub fn load(path: &Path, ctx: &Context) -> Result<Self> {
        let content = fs::read(ctx.resolve_path(path)).map_err(|source| SnipError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, &content, ctx)
    }

    /// Builds a document from in-memory content.
    pub fn from_bytes(path: &Path, content: &[u8], ctx: &Context) -> Result<Self> {
        let extractor = ScissorExtractor::new(&ctx.config.scissors)?;
        let program = extractor
            .program_lines(content)
            .map_err(|e| e.in_document(path.to_path_buf()))?;
        Ok(Self {
            path: path.to_path_buf(),
            program,
        })
    }

    /// Returns the effective program as text.
    pub fn program_text(&self) -> String {
        join_lines(&self.program)
    }
}

/// Tangles all documents selected by the configured source patterns.
pub fn tangle_documents(ctx: &Context) -> Result<TangleReport> {
    let source_files = ctx.source_files()?;
    if source_files.is_empty() {
        return Err(SnipError::Config(
            "No documents to tangle (pass files or set source_patterns)".to_string(),
        ));
    }
    tangle_files(ctx, &source_files)
}

/// Tangles the given documents in order as one run.
///
/// In execute mode files are written below `base_dir` and run blocks are
/// executed there; in preview mode nothing is written or spawned and run
/// blocks are printed to stdout instead.
pub fn tangle_files(ctx: &Context, source_files: &[PathBuf]) -> Result<TangleReport> {
    if ctx.is_preview() {
        let executor = PreviewExecutor::new(ctx.config.preview_indent);
        let (sink, report) = tangle_with(ctx, source_files, VirtualSink::new(), executor)?;
        for name in sink.list_files() {
            let lines = report.files.get(name).copied().unwrap_or(0);
            tracing::info!("Would write {} ({} lines)", name, lines);
        }
        Ok(report)
    } else {
        let sink = FsSink::new(ctx.base_dir.clone());
        let executor = ShellExecutor::new(ctx.config.shell.clone()).in_dir(ctx.base_dir.clone());
        let (_, report) = tangle_with(ctx, source_files, sink, executor)?;
        Ok(report)
    }
}

/// Tangles a single document.
pub fn tangle_file(ctx: &Context, path: &Path) -> Result<TangleReport> {
    tangle_files(ctx, &[path.to_path_buf()])
}

/// Tangles documents with an explicit sink and executor.
pub fn tangle_with<S, E>(
    ctx: &Context,
    source_files: &[PathBuf],
    sink: S,
    executor: E,
) -> Result<(S, TangleReport)>
where
    S: FileSink,
    E: CommandExecutor,
{
    let mut tangler = Tangler::new(&ctx.config, sink, executor)?;

    for path in source_files {
        tracing::info!("Tangling {} ({})", path.display(), ctx.mode());
        let doc = Document::load(path, ctx)?;
        tangler
            .tangle_lines(&doc.program)
            .map_err(|e| e.in_document(path.clone()))?;
    }

    let (sink, _, report) = tangler.into_parts();
    Ok((sink, report))
}

/// Returns the effective program text of a document.
pub fn extract_program(ctx: &Context, path: &Path) -> Result<String> {
    Ok(Document::load(path, ctx)?.program_text())
}
