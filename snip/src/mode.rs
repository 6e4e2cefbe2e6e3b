//! Execution mode definitions.
//!
//! - `execute`: write output files and run `> Run` blocks through the shell
//! - `preview`: render run blocks without spawning anything and leave files untouched

use serde::{Deserialize, Serialize};

/// Whether side effects are performed or only rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Mode {
    /// Write files and execute run blocks.
    #[default]
    Execute,
    /// Render run blocks and report files without touching the file system.
    Preview,
}

impl Mode {
    /// Returns the mode name as a static string.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Execute => "execute",
            Mode::Preview => "preview",
        }
    }

    /// Returns true if run blocks are actually spawned.
    pub fn executes(&self) -> bool {
        matches!(self, Mode::Execute)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
