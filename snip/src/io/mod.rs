//! I/O operations for tangled output.

mod file_sink;
mod virtual_sink;

pub use file_sink::{FileSink, FsSink};
pub use virtual_sink::VirtualSink;
