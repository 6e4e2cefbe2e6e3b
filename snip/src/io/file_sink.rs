//! Output file handling.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{Result, SnipError};
use crate::model::WriteMode;

/// Destination for file blocks.
///
/// At most one handle per name is open at any time. A handle opened with
/// [`WriteMode::Truncate`] discards earlier content, including content
/// written by previous blocks of the same run.
pub trait FileSink: std::fmt::Debug {
    /// Opens `name` for the block that starts now.
    fn open(&mut self, name: &str, mode: WriteMode) -> Result<()>;

    /// Appends the bytes of `text` followed by a newline.
    fn write(&mut self, name: &str, text: &[u8]) -> Result<()>;

    /// Flushes and releases the handle for `name`.
    fn close(&mut self, name: &str) -> Result<()>;
}

/// Real file system sink.
#[derive(Debug, Default)]
pub struct FsSink {
    /// Base directory for relative names.
    pub base_dir: PathBuf,
    handles: HashMap<String, BufWriter<File>>,
}

impl FsSink {
    /// Creates a sink writing below `base_dir`.
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            handles: HashMap::new(),
        }
    }

    /// Resolves a file name relative to the base directory.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Returns true if a handle for `name` is open.
    pub fn is_open(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    fn sink_error(&self, name: &str, message: &str) -> SnipError {
        SnipError::Sink {
            path: self.resolve(name),
            message: message.to_string(),
        }
    }
}

impl FileSink for FsSink {
    fn open(&mut self, name: &str, mode: WriteMode) -> Result<()> {
        if self.is_open(name) {
            return Err(self.sink_error(name, "already open"));
        }

        let path = self.resolve(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        match mode {
            WriteMode::Truncate => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };
        let file = options.open(&path)?;

        tracing::debug!("open {} ({:?})", path.display(), mode);
        self.handles.insert(name.to_string(), BufWriter::new(file));
        Ok(())
    }

    fn write(&mut self, name: &str, text: &[u8]) -> Result<()> {
        let Some(writer) = self.handles.get_mut(name) else {
            return Err(self.sink_error(name, "write to a file that is not open"));
        };
        writer.write_all(text)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<()> {
        let Some(mut writer) = self.handles.remove(name) else {
            return Err(self.sink_error(name, "close of a file that is not open"));
        };
        writer.flush()?;
        Ok(())
    }
}
