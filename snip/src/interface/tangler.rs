//! Single forward pass over a document, dispatching effects.

use indexmap::IndexMap;

use crate::config::Config;
use crate::errors::Result;
use crate::exec::CommandExecutor;
use crate::io::FileSink;
use crate::machine::Machine;
use crate::model::Effect;
use crate::readers::{LineClassifier, ScissorExtractor, SourceLine};

/// Summary of what a tangle pass did (or would do, in preview mode).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TangleReport {
    /// Documents processed.
    pub documents: usize,
    /// Output files in first-opened order, with the number of lines written.
    pub files: IndexMap<String, usize>,
    /// Run blocks handed to the executor.
    pub runs: usize,
}

impl TangleReport {
    /// Returns true if no file was written and no block was run.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.runs == 0
    }

    /// Describes the report, one entry per line.
    pub fn describe(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .files
            .iter()
            .map(|(name, count)| format!("{} ({} lines)", name, count))
            .collect();
        if self.runs > 0 {
            lines.push(format!("{} run blocks", self.runs));
        }
        lines
    }
}

/// Drives the state machine and dispatches its effects.
///
/// The sink and executor are shared by every document tangled with the
/// same `Tangler`, so one run can span several documents.
#[derive(Debug)]
pub struct Tangler<S, E> {
    sink: S,
    executor: E,
    classifier: LineClassifier,
    extractor: ScissorExtractor,
    report: TangleReport,
}

impl<S: FileSink, E: CommandExecutor> Tangler<S, E> {
    /// Creates a tangler configured by `config`.
    pub fn new(config: &Config, sink: S, executor: E) -> Result<Self> {
        Ok(Self {
            sink,
            executor,
            classifier: LineClassifier::new(config.lenient_blockquotes),
            extractor: ScissorExtractor::new(&config.scissors)?,
            report: TangleReport::default(),
        })
    }

    /// Tangles one document: scissor extraction, then the line pass.
    pub fn tangle_str(&mut self, input: &str) -> Result<()> {
        let program = self.extractor.program_lines(input)?;
        self.tangle_lines(&program)
    }

    /// Tangles already extracted program lines.
    ///
    /// Stops at the first error; effects already dispatched stay in place.
    pub fn tangle_lines(&mut self, lines: &[SourceLine]) -> Result<()> {
        let mut machine = Machine::new(self.classifier);
        for line in lines {
            for effect in machine.feed(line)? {
                self.dispatch(effect)?;
            }
        }
        machine.finish()?;
        self.report.documents += 1;
        Ok(())
    }

    fn dispatch(&mut self, effect: Effect) -> Result<()> {
        tracing::trace!("{}", effect.describe());
        match effect {
            Effect::Open { name, mode } => {
                self.sink.open(&name, mode)?;
                self.report.files.entry(name).or_insert(0);
            }
            Effect::Write { name, text } => {
                self.sink.write(&name, &text)?;
                *self.report.files.entry(name).or_insert(0) += 1;
            }
            Effect::Close { name } => self.sink.close(&name)?,
            Effect::Run(block) => {
                tracing::debug!(
                    "{} executor: lines {}-{}",
                    self.executor.name(),
                    block.start_line,
                    block.end_line
                );
                self.executor.run(&block)?;
                self.report.runs += 1;
            }
        }
        Ok(())
    }

    /// Returns the report so far.
    pub fn report(&self) -> &TangleReport {
        &self.report
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Consumes the tangler, returning sink, executor and report.
    pub fn into_parts(self) -> (S, E, TangleReport) {
        (self.sink, self.executor, self.report)
    }
}
