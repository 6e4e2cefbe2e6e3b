//! Type definitions for readers.

/// One line of a source document.
///
/// Documents are not required to be UTF-8. `raw` keeps the exact bytes;
/// `content` is the lossy text used for matching and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line number in the original document (1-indexed).
    pub number: usize,
    /// Content without the line terminator, invalid UTF-8 replaced.
    pub content: String,
    /// Exact bytes of the line without the terminator.
    pub raw: Vec<u8>,
}

impl SourceLine {
    /// Creates a source line from text.
    pub fn new(number: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            number,
            raw: content.as_bytes().to_vec(),
            content,
        }
    }

    /// Creates a source line from raw bytes.
    pub fn from_bytes(number: usize, raw: &[u8]) -> Self {
        Self {
            number,
            content: String::from_utf8_lossy(raw).into_owned(),
            raw: raw.to_vec(),
        }
    }
}

/// Splits a document into numbered lines.
///
/// Both `\n` and `\r\n` terminators are accepted.
pub fn source_lines(input: &[u8]) -> impl Iterator<Item = SourceLine> + '_ {
    input
        .split_inclusive(|&b| b == b'\n')
        .enumerate()
        .map(|(i, chunk)| {
            let line = match chunk.strip_suffix(b"\n") {
                Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
                None => chunk,
            };
            SourceLine::from_bytes(i + 1, line)
        })
}

/// Joins lines back into text, terminating every line with `\n`.
pub fn join_lines(lines: &[SourceLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.content);
        out.push('\n');
    }
    out
}
