//! Caret diagnostics
//!
//! The fixed presentation tooling parses:
//!
//! ```text
//! <message>
//! <file>:<line>:<column>
//! <verbatim source line>
//! <column - 1 spaces>^
//! ```

use crate::util::span::{Position, SourceFile};
use std::fmt;

/// A rendered diagnostic carrying the offending location and source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong
    pub message: String,
    /// File name
    pub file: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Verbatim text of the offending line
    pub line_text: String,
}

impl Diagnostic {
    /// Create a diagnostic at a position, quoting the line from `source`
    pub fn at(message: impl Into<String>, source: &SourceFile, position: Position) -> Self {
        Self {
            message: message.into(),
            file: source.name.clone(),
            line: position.line,
            column: position.column,
            line_text: source.line_text(position.line).to_string(),
        }
    }

    /// The caret line: `column - 1` spaces followed by `^`
    pub fn caret(&self) -> String {
        format!("{}^", " ".repeat(self.column.saturating_sub(1)))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f, "{}:{}:{}", self.file, self.line, self.column)?;
        writeln!(f, "{}", self.line_text)?;
        write!(f, "{}", self.caret())
    }
}
