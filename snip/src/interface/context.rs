//! Execution context for tangle operations.

use std::path::{Path, PathBuf};

use crate::config::{Config, Mode};
use crate::errors::{Result, SnipError};

/// Context for tangle operations.
///
/// Output file names and run blocks are resolved against `base_dir`.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration.
    pub config: Config,
    /// Base directory for operations.
    pub base_dir: PathBuf,
}

impl Context {
    /// Creates a new context with the given configuration.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        Self { config, base_dir }
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Creates a context from the current directory.
    pub fn from_current_dir() -> Result<Self> {
        let base_dir = std::env::current_dir()?;
        let config = crate::config::read_config(&base_dir)?;
        Ok(Self::new(config, base_dir))
    }

    /// Returns the execution mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Returns true if nothing is written or executed.
    pub fn is_preview(&self) -> bool {
        !self.config.mode.executes()
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Returns documents matching the configured source patterns.
    ///
    /// Paths are relative to `base_dir` when they lie below it.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for pattern in &self.config.source_patterns {
            let full_pattern = self.base_dir.join(pattern);
            for entry in glob::glob(&full_pattern.to_string_lossy())? {
                let path = entry.map_err(|e| SnipError::Io(e.into()))?;
                if !path.is_file() {
                    continue;
                }
                let relative = path
                    .strip_prefix(&self.base_dir)
                    .map(Path::to_path_buf)
                    .unwrap_or(path);
                files.push(relative);
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }
}
