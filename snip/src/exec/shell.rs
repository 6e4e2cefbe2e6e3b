//! Run blocks through the host command interpreter.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::CommandExecutor;
use crate::config::ShellConfig;
use crate::errors::{Result, SnipError};
use crate::model::RunBlock;

/// Executes run blocks as a single command line through a shell.
///
/// The child inherits stdin, stdout and stderr and is awaited before the
/// next line of the document is processed. A non-zero exit status writes
/// the numbered block body to `diagnostics` and fails with
/// [`SnipError::RunFailure`].
pub struct ShellExecutor<W = io::Stderr> {
    shell: ShellConfig,
    working_dir: Option<PathBuf>,
    diagnostics: W,
}

impl ShellExecutor<io::Stderr> {
    /// Creates an executor reporting failures on stderr.
    pub fn new(shell: ShellConfig) -> Self {
        Self::with_diagnostics(shell, io::stderr())
    }
}

impl<W: Write> ShellExecutor<W> {
    /// Creates an executor reporting failures to the given writer.
    pub fn with_diagnostics(shell: ShellConfig, diagnostics: W) -> Self {
        Self {
            shell,
            working_dir: None,
            diagnostics,
        }
    }

    /// Runs children in `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Returns the diagnostic writer.
    pub fn diagnostics(&self) -> &W {
        &self.diagnostics
    }
}

impl<W> std::fmt::Debug for ShellExecutor<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellExecutor")
            .field("shell", &self.shell)
            .field("working_dir", &self.working_dir)
            .finish()
    }
}

impl<W: Write> CommandExecutor for ShellExecutor<W> {
    fn name(&self) -> &str {
        "shell"
    }

    fn run(&mut self, block: &RunBlock) -> Result<()> {
        tracing::info!(
            "Running lines {}-{} with {}",
            block.start_line,
            block.end_line,
            self.shell.describe()
        );

        let mut command = Command::new(&self.shell.program);
        command
            .args(&self.shell.args)
            .arg(command_text(block))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|source| SnipError::Spawn {
            program: self.shell.program.clone(),
            source,
        })?;

        if status.success() {
            return Ok(());
        }

        // Killed by a signal: no code to propagate.
        let code = status.code().unwrap_or(1);
        self.diagnostics
            .write_all(block.render_failure(code).as_bytes())?;
        self.diagnostics.flush()?;

        Err(SnipError::RunFailure {
            status: code,
            start_line: block.start_line,
            end_line: block.end_line,
        })
    }
}

/// The block body as a single argument, bytes preserved where the platform allows.
#[cfg(unix)]
fn command_text(block: &RunBlock) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(block.raw_body())
}

#[cfg(not(unix))]
fn command_text(block: &RunBlock) -> OsString {
    OsString::from(block.body())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::readers::SourceLine;
    use std::fs;
    use tempfile::tempdir;

    fn block(lines: &[&str]) -> RunBlock {
        let numbered = lines
            .iter()
            .enumerate()
            .map(|(i, l)| SourceLine::new(21 + i, *l))
            .collect();
        RunBlock::new(20, 21 + lines.len(), numbered)
    }

    #[test]
    fn test_successful_block() {
        let dir = tempdir().unwrap();
        let mut exec = ShellExecutor::with_diagnostics(ShellConfig::default(), Vec::new())
            .in_dir(dir.path().to_path_buf());

        exec.run(&block(&["cat <<EOF > made.txt", "hello", "EOF"]))
            .unwrap();

        let content = fs::read_to_string(dir.path().join("made.txt")).unwrap();
        assert_eq!(content, "hello\n");
        assert!(exec.diagnostics().is_empty());
    }

    #[test]
    fn test_multiline_conditional() {
        let dir = tempdir().unwrap();
        let mut exec = ShellExecutor::with_diagnostics(ShellConfig::default(), Vec::new())
            .in_dir(dir.path().to_path_buf());

        exec.run(&block(&["if true; then", "  touch yes", "fi"]))
            .unwrap();
        assert!(dir.path().join("yes").exists());
    }

    #[test]
    fn test_failing_block_reports_lines() {
        let mut exec = ShellExecutor::with_diagnostics(ShellConfig::default(), Vec::new());

        let err = exec.run(&block(&["echo first", "exit 3"])).unwrap_err();
        assert!(matches!(
            err,
            SnipError::RunFailure {
                status: 3,
                start_line: 20,
                end_line: 23
            }
        ));
        assert_eq!(err.exit_status(), 3);

        let report = String::from_utf8(exec.diagnostics().clone()).unwrap();
        assert_eq!(
            report,
            "run block at lines 20-23 failed with exit status 3\n   21 | echo first\n   22 | exit 3\n"
        );
    }

    #[test]
    fn test_missing_interpreter() {
        let shell = ShellConfig::new("/nonexistent/interpreter", &["-c"]);
        let mut exec = ShellExecutor::with_diagnostics(shell, Vec::new());
        let err = exec.run(&block(&["true"])).unwrap_err();
        assert!(matches!(err, SnipError::Spawn { .. }));
    }
}
