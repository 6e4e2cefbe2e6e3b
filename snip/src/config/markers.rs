//! Scissor marker patterns delimiting the program ranges of a document.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker shapes for scissor ranges.
///
/// A marker line is `dashes` dashes, a two-character glyph, and `dashes`
/// dashes again, e.g. `--------8<--------`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScissorMarkers {
    /// Number of dashes on each side of the glyph.
    #[serde(default = "default_dashes")]
    pub dashes: usize,

    /// Glyph that opens a range.
    #[serde(default = "default_start")]
    pub start: String,

    /// Glyph that closes a range.
    #[serde(default = "default_end")]
    pub end: String,
}

fn default_dashes() -> usize {
    8
}

fn default_start() -> String {
    "8<".to_string()
}

fn default_end() -> String {
    ">8".to_string()
}

impl Default for ScissorMarkers {
    fn default() -> Self {
        Self {
            dashes: default_dashes(),
            start: default_start(),
            end: default_end(),
        }
    }
}

impl ScissorMarkers {
    /// Creates a new marker configuration.
    pub fn new(dashes: usize, start: &str, end: &str) -> Self {
        Self {
            dashes,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Formats the line that opens a range.
    pub fn format_start(&self) -> String {
        self.format(&self.start)
    }

    /// Formats the line that closes a range.
    pub fn format_end(&self) -> String {
        self.format(&self.end)
    }

    fn format(&self, glyph: &str) -> String {
        let dashes = "-".repeat(self.dashes);
        format!("{}{}{}", dashes, glyph, dashes)
    }

    /// Creates a regex pattern for matching start markers.
    pub fn start_pattern(&self) -> String {
        self.pattern(&self.start)
    }

    /// Creates a regex pattern for matching end markers.
    pub fn end_pattern(&self) -> String {
        self.pattern(&self.end)
    }

    fn pattern(&self, glyph: &str) -> String {
        format!(
            r"^-{{{n}}}{glyph}-{{{n}}}\s*$",
            n = self.dashes,
            glyph = regex::escape(glyph)
        )
    }

    /// Compiles the start and end patterns.
    pub fn compile(&self) -> Result<(Regex, Regex), regex::Error> {
        Ok((
            Regex::new(&self.start_pattern())?,
            Regex::new(&self.end_pattern())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let markers = ScissorMarkers::default();
        assert_eq!(markers.dashes, 8);
        assert_eq!(markers.format_start(), "--------8<--------");
        assert_eq!(markers.format_end(), "-------->8--------");
    }

    #[test]
    fn test_patterns_are_exact() {
        let (start, end) = ScissorMarkers::default().compile().unwrap();
        assert!(start.is_match("--------8<--------"));
        assert!(start.is_match("--------8<--------  "));
        assert!(!start.is_match("---------8<--------"));
        assert!(!start.is_match("-------8<--------"));
        assert!(!start.is_match("x--------8<--------"));
        assert!(end.is_match("-------->8--------"));
        assert!(!end.is_match("--------8<--------"));
    }

    #[test]
    fn test_custom_dashes() {
        let markers = ScissorMarkers::new(3, "8<", ">8");
        let (start, _) = markers.compile().unwrap();
        assert!(start.is_match("---8<---"));
        assert!(!start.is_match("--------8<--------"));
    }
}
