//! The tangle state machine.
//!
//! [`step`] is a pure function from the current state and one classified
//! line to the next state plus the side effects that line requests. It
//! never touches the file system or spawns processes; [`Machine`] bundles
//! it with a [`LineClassifier`] for convenient line-by-line feeding.

use crate::errors::{Result, SnipError};
use crate::model::{Effect, MachineState, RunBlock, RunState, WriteMode};
use crate::readers::{LineClassifier, LineKind, SourceLine};
use crate::text_location::TextLocation;

/// Applies one classified line to `state`.
pub fn step(
    mut state: MachineState,
    kind: LineKind,
    line: &SourceLine,
) -> Result<(MachineState, Vec<Effect>)> {
    let mut effects = Vec::new();
    let parser = &mut state.parser;

    match kind {
        LineKind::FileOpen(name) => parser.set_target(name, false),
        LineKind::FileContinue(name) => parser.set_target(name, true),
        LineKind::RunDeclare => parser.declare_run(),

        LineKind::FenceToggle => match parser.fence_open_at {
            None => {
                parser.fence_open_at = Some(line.number);
                if let Some(name) = &parser.target {
                    effects.push(Effect::Open {
                        name: name.clone(),
                        mode: WriteMode::from_append(parser.append),
                    });
                }
            }
            Some(start) => {
                if !state.buffer.is_empty() {
                    effects.push(Effect::Run(RunBlock::new(
                        start,
                        line.number,
                        state.buffer.take(),
                    )));
                }
                if let Some(name) = &parser.target {
                    effects.push(Effect::Close { name: name.clone() });
                    // Further fences under the same header extend the file.
                    parser.append = true;
                }
                if parser.run == RunState::Collecting {
                    parser.run = RunState::Declared;
                }
                parser.fence_open_at = None;
            }
        },

        LineKind::QuotedContent(text) => {
            if let Some(name) = &parser.target {
                effects.push(Effect::Write {
                    name: name.clone(),
                    text,
                });
            } else if parser.is_run() {
                state.buffer.push(SourceLine::from_bytes(line.number, &text));
                parser.run = RunState::Collecting;
            }
        }

        LineKind::Unquoted => parser.reset(),

        LineKind::MalformedQuote => {
            let message = match parser.fence_open_at {
                Some(start) => format!("unquoted line inside the fence opened at line {}", start),
                None if parser.has_context() => {
                    "quoted line between a header and its fence is neither a header nor a fence"
                        .to_string()
                }
                None => "quoted line outside any File or Run block".to_string(),
            };
            return Err(SnipError::malformed(line.number, message));
        }
    }

    Ok((state, effects))
}

/// Checks the state left at end of input.
pub fn finish(state: &MachineState) -> Result<()> {
    match state.parser.fence_open_at {
        Some(start) => Err(SnipError::UnterminatedFence {
            location: TextLocation::line_only(start),
        }),
        None => Ok(()),
    }
}

/// Classifier and state bundled for line-by-line feeding.
#[derive(Debug, Default)]
pub struct Machine {
    classifier: LineClassifier,
    state: MachineState,
}

impl Machine {
    /// Creates a machine in the zero state.
    pub fn new(classifier: LineClassifier) -> Self {
        Self {
            classifier,
            state: MachineState::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Classifies and applies one line, returning the requested effects.
    pub fn feed(&mut self, line: &SourceLine) -> Result<Vec<Effect>> {
        let kind = self.classifier.classify(line, &self.state.parser)?;
        let state = std::mem::take(&mut self.state);
        let (state, effects) = step(state, kind, line)?;
        self.state = state;
        Ok(effects)
    }

    /// Ends the pass, rejecting an unterminated fence.
    pub fn finish(&self) -> Result<()> {
        finish(&self.state)
    }

    /// Runs a whole sequence of lines, collecting every effect in order.
    pub fn run_all<'a, I>(&mut self, lines: I) -> Result<Vec<Effect>>
    where
        I: IntoIterator<Item = &'a SourceLine>,
    {
        let mut effects = Vec::new();
        for line in lines {
            effects.extend(self.feed(line)?);
        }
        self.finish()?;
        Ok(effects)
    }
}
