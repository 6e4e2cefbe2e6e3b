//! Command interpreter used for run blocks.

use serde::{Deserialize, Serialize};

/// The host command interpreter that receives a run block body.
///
/// The body is passed as the final argument, after `args`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Interpreter program.
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the command body.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

#[cfg(windows)]
fn default_program() -> String {
    "cmd".to_string()
}

#[cfg(not(windows))]
fn default_program() -> String {
    "sh".to_string()
}

#[cfg(windows)]
fn default_args() -> Vec<String> {
    vec!["/C".to_string()]
}

#[cfg(not(windows))]
fn default_args() -> Vec<String> {
    vec!["-c".to_string()]
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

impl ShellConfig {
    /// Creates a shell configuration.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Describes the invocation for logs, e.g. `sh -c`.
    pub fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
