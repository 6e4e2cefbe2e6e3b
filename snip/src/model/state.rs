//! Parser state threaded through the tangle state machine.

use crate::readers::SourceLine;

/// Progress of a `> Run` declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    /// No run block declared.
    #[default]
    None,
    /// `> Run` seen; no content collected in the current fence yet.
    Declared,
    /// At least one content line buffered in the current fence.
    Collecting,
}

/// Mutable state of the tangle state machine.
///
/// `fence_open_at` is set exactly while inside a fence. A file target and
/// a run declaration never coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    /// File named by the last `> File` header.
    pub target: Option<String>,
    /// Whether the header carried the `continued` suffix.
    pub append: bool,
    /// Run declaration progress.
    pub run: RunState,
    /// Line number of the opening fence of the current block.
    pub fence_open_at: Option<usize>,
}

impl ParserState {
    /// Creates the zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while inside a fence.
    pub fn in_fence(&self) -> bool {
        self.fence_open_at.is_some()
    }

    /// Returns true if a file target or run declaration is pending.
    pub fn has_context(&self) -> bool {
        self.target.is_some() || self.run != RunState::None
    }

    /// Returns true if the current block feeds a run buffer.
    pub fn is_run(&self) -> bool {
        self.run != RunState::None
    }

    /// Clears target, append flag, and run declaration.
    ///
    /// The fence marker is left alone; resets only happen outside fences.
    pub fn reset(&mut self) {
        self.target = None;
        self.append = false;
        self.run = RunState::None;
    }

    /// Points the state at a file, replacing any previous context.
    pub fn set_target(&mut self, name: String, append: bool) {
        self.target = Some(name);
        self.append = append;
        self.run = RunState::None;
    }

    /// Declares a run block, replacing any previous context.
    pub fn declare_run(&mut self) {
        self.target = None;
        self.append = false;
        self.run = RunState::Declared;
    }
}

/// Content lines of the run block currently being collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunBuffer {
    lines: Vec<SourceLine>,
}

impl RunBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one content line.
    pub fn push(&mut self, line: SourceLine) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empties the buffer, returning its lines.
    pub fn take(&mut self) -> Vec<SourceLine> {
        std::mem::take(&mut self.lines)
    }
}

/// Everything the state machine carries from one line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineState {
    pub parser: ParserState,
    pub buffer: RunBuffer,
}

impl MachineState {
    pub fn new() -> Self {
        Self::default()
    }
}
