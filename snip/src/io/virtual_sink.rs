//! In-memory sink for preview runs and tests.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::file_sink::FileSink;
use crate::errors::{Result, SnipError};
use crate::model::WriteMode;

/// Sink that records file content in memory and never touches the disk.
///
/// Content for a name starts empty when opened with truncation; appending
/// continues whatever this sink recorded earlier for that name.
#[derive(Debug, Clone, Default)]
pub struct VirtualSink {
    files: IndexMap<String, Vec<u8>>,
    open: HashSet<String>,
}

impl VirtualSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded bytes of a file.
    pub fn content(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// Returns the recorded content of a file as text, replacing invalid UTF-8.
    pub fn text(&self, name: &str) -> Option<String> {
        self.content(name)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Lists recorded files in the order they were first opened.
    pub fn list_files(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    /// Returns true if a handle for `name` is open.
    pub fn is_open(&self, name: &str) -> bool {
        self.open.contains(name)
    }

    fn not_open(name: &str, message: &str) -> SnipError {
        SnipError::Sink {
            path: name.into(),
            message: message.to_string(),
        }
    }
}

impl FileSink for VirtualSink {
    fn open(&mut self, name: &str, mode: WriteMode) -> Result<()> {
        if !self.open.insert(name.to_string()) {
            return Err(Self::not_open(name, "already open"));
        }
        let content = self.files.entry(name.to_string()).or_default();
        if mode == WriteMode::Truncate {
            content.clear();
        }
        tracing::debug!("would open {} ({:?})", name, mode);
        Ok(())
    }

    fn write(&mut self, name: &str, text: &[u8]) -> Result<()> {
        if !self.open.contains(name) {
            return Err(Self::not_open(name, "write to a file that is not open"));
        }
        let content = self.files.entry(name.to_string()).or_default();
        content.extend_from_slice(text);
        content.push(b'\n');
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<()> {
        if !self.open.remove(name) {
            return Err(Self::not_open(name, "close of a file that is not open"));
        }
        Ok(())
    }
}
