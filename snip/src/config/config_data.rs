//! Configuration data structures.

use serde::{Deserialize, Serialize};

use super::markers::ScissorMarkers;
use super::shell::ShellConfig;
use crate::mode::Mode;

/// Main configuration structure for snip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Glob patterns for documents tangled when none are named explicitly.
    #[serde(default)]
    pub source_patterns: Vec<String>,

    /// Whether run blocks are executed or previewed.
    #[serde(default)]
    pub mode: Mode,

    /// Indentation used when previewing run blocks.
    #[serde(default = "default_preview_indent")]
    pub preview_indent: usize,

    /// Treat stray blockquotes outside any annotation as prose instead of an error.
    #[serde(default)]
    pub lenient_blockquotes: bool,

    /// Scissor marker shapes.
    #[serde(default)]
    pub scissors: ScissorMarkers,

    /// Interpreter for run blocks.
    #[serde(default)]
    pub shell: ShellConfig,
}

fn default_preview_indent() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_patterns: Vec::new(),
            mode: Mode::default(),
            preview_indent: default_preview_indent(),
            lenient_blockquotes: false,
            scissors: ScissorMarkers::default(),
            shell: ShellConfig::default(),
        }
    }
}

impl Config {
    /// Returns a copy of this configuration in preview mode.
    #[must_use]
    pub fn preview(mut self) -> Self {
        self.mode = Mode::Preview;
        self
    }
}
