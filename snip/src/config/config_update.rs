//! Configuration update and merging.

use serde::{Deserialize, Serialize};

use super::config_data::Config;
use super::markers::ScissorMarkers;
use super::shell::ShellConfig;
use crate::mode::Mode;

/// Partial configuration update that can be merged into a Config.
///
/// All fields are optional. Only specified fields will override the base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub source_patterns: Option<Vec<String>>,

    #[serde(default)]
    pub mode: Option<Mode>,

    #[serde(default)]
    pub preview_indent: Option<usize>,

    #[serde(default)]
    pub lenient_blockquotes: Option<bool>,

    #[serde(default)]
    pub scissors: Option<ScissorMarkers>,

    #[serde(default)]
    pub shell: Option<ShellConfig>,
}

impl ConfigUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges this update into a base configuration, returning a new Config.
    ///
    /// Consumes `self` so fields can be moved instead of cloned.
    pub fn merge_into(self, base: &Config) -> Config {
        Config {
            source_patterns: self
                .source_patterns
                .unwrap_or_else(|| base.source_patterns.clone()),
            mode: self.mode.unwrap_or(base.mode),
            preview_indent: self.preview_indent.unwrap_or(base.preview_indent),
            lenient_blockquotes: self
                .lenient_blockquotes
                .unwrap_or(base.lenient_blockquotes),
            scissors: self.scissors.unwrap_or_else(|| base.scissors.clone()),
            shell: self.shell.unwrap_or_else(|| base.shell.clone()),
        }
    }
}
