//! iCalendar parse error types.

use thiserror::Error;

/// Result type for iCalendar parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during iCalendar parsing.
///
/// Every parse error is terminal for the call: no partial document is ever
/// returned. The error carries the index of the offending logical line and
/// its raw (still escaped) content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}: {content:?}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Index of the offending logical line (0-based; blank lines count).
    pub line: usize,
    /// Raw content of the offending logical line.
    pub content: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, content: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            content: content.into(),
        }
    }
}

/// The kind of parse error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A non-empty line without a `Name:Value` colon.
    #[error("expected a key-value pair")]
    MalformedLine,
    /// A block whose matching end line was never found.
    #[error("could not find end of block")]
    UnterminatedBlock,
    /// An end line with no matching open block at the current depth.
    #[error("block nesting mismatch")]
    NestingMismatch,
    /// A top-level object other than a VCALENDAR block.
    #[error("expected only VCALENDAR objects in root")]
    UnexpectedRootObject,
}
