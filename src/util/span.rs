//! Source location tracking

use serde::Serialize;
use std::fmt;

/// Source position (line, column, and byte offset)
///
/// Lines and columns are 1-indexed. The column counts consumed characters
/// since the last newline: consuming a newline resets it to 0, so the next
/// consumed character lands on column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from start of file
    pub offset: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column, offset: 0 }
    }

    /// Create a new position with offset
    #[inline]
    pub fn with_offset(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    /// Create a dummy position
    #[inline]
    pub fn dummy() -> Self {
        Self { line: 0, column: 0, offset: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source span (start position to end position)
///
/// `end.offset` is exclusive, so `&source[start.offset..end.offset]` is the
/// exact source text covered by the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive byte offset)
    pub end: Position,
}

impl Span {
    /// Create a new span
    #[inline]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a dummy span
    #[inline]
    pub fn dummy() -> Self {
        Self {
            start: Position::dummy(),
            end: Position::dummy(),
        }
    }

    /// Check if this is a dummy span
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.start.line == 0
    }

    /// Span covering both operands
    #[inline]
    pub fn to(&self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }

    /// Get the source text length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Check if span is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

/// Source file information
///
/// Shared by the lexer, parser and resolver so faults can quote the
/// offending source line verbatim.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name
    pub name: String,
    /// File content
    pub content: String,
    /// Byte offset of the start of each line
    line_offsets: Vec<usize>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut line_offsets = vec![0];
        for (i, c) in content.char_indices() {
            if c == '\n' {
                line_offsets.push(i + 1);
            }
        }

        Self {
            name: name.into(),
            content,
            line_offsets,
        }
    }

    /// Number of lines in the file
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Full text of a line (1-indexed), without the trailing newline
    pub fn line_text(&self, line: usize) -> &str {
        let Some(&start) = self.line_offsets.get(line.saturating_sub(1)) else {
            return "";
        };
        let end = self
            .line_offsets
            .get(line)
            .map(|&next| next.saturating_sub(1))
            .unwrap_or(self.content.len());
        self.content.get(start..end).unwrap_or("")
    }

    /// Source text covered by a span
    pub fn span_text(&self, span: Span) -> &str {
        self.content
            .get(span.start.offset..span.end.offset)
            .unwrap_or("")
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text_lookup() {
        let file = SourceFile::new("t.tgm", "first\nsecond\nthird");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_text(1), "first");
        assert_eq!(file.line_text(2), "second");
        assert_eq!(file.line_text(3), "third");
        assert_eq!(file.line_text(4), "");
    }

    #[test]
    fn test_line_text_trailing_newline() {
        let file = SourceFile::new("t.tgm", "only\n");
        assert_eq!(file.line_text(1), "only");
        assert_eq!(file.line_text(2), "");
    }

    #[test]
    fn test_span_text() {
        let file = SourceFile::new("t.tgm", "model Foo {}");
        let span = Span::new(
            Position::with_offset(1, 7, 6),
            Position::with_offset(1, 9, 9),
        );
        assert_eq!(file.span_text(span), "Foo");
    }
}
