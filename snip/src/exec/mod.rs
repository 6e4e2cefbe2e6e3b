//! Execution of run blocks.

mod preview;
mod shell;

pub use preview::PreviewExecutor;
pub use shell::ShellExecutor;

use crate::errors::Result;
use crate::model::RunBlock;

/// Consumer of completed run blocks.
///
/// The state machine never spawns processes itself; every run block it
/// closes is handed to an executor. An error aborts the whole pass.
pub trait CommandExecutor {
    /// Returns the name of this executor.
    fn name(&self) -> &str;

    /// Executes or renders one run block, blocking until it is done.
    fn run(&mut self, block: &RunBlock) -> Result<()>;
}
