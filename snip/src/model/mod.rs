//! Core model types for the tangle engine.

mod effect;
mod run_block;
mod state;

pub use effect::{Effect, WriteMode};
pub use run_block::RunBlock;
pub use state::{MachineState, ParserState, RunBuffer, RunState};
