//! iCalendar block parser (RFC 5545).
//!
//! Builds a node tree from logical lines in a single forward pass, enforcing
//! BEGIN/END nesting. The cursor is shared across recursion levels, so every
//! line is split exactly once and parsing stays linear in the input length.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{split_content_line, unescape_value};
use crate::rfc::ical::core::{
    BLOCK_BEGIN, BLOCK_END, CALENDAR_OBJECT, Component, Document, Node, Property,
};

/// Parses logical lines into a document.
///
/// Blank lines are skipped. Every top-level object must be a
/// `BEGIN:VCALENDAR` block; otherwise the whole parse fails and no partial
/// document is returned.
///
/// ## Errors
/// - [`ParseErrorKind::MalformedLine`] for a non-empty line without a colon
/// - [`ParseErrorKind::UnterminatedBlock`] when input ends inside a block
///   (reported at the opening BEGIN line)
/// - [`ParseErrorKind::NestingMismatch`] for a stray or wrong-valued END line
/// - [`ParseErrorKind::UnexpectedRootObject`] for a top-level object that is
///   not a VCALENDAR block
#[tracing::instrument(skip(lines), fields(line_count = lines.len()))]
pub fn parse_document(lines: &[String]) -> ParseResult<Document> {
    let mut calendars = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let raw = &lines[cursor];
        if raw.is_empty() {
            cursor += 1;
            continue;
        }

        let (name, value) = split_content_line(raw)
            .ok_or_else(|| ParseError::new(ParseErrorKind::MalformedLine, cursor, raw))?;

        match name {
            BLOCK_BEGIN => {
                let begin_index = cursor;
                let calendar = parse_component(lines, &mut cursor, unescape_value(value))?;
                if calendar.name != CALENDAR_OBJECT {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedRootObject,
                        begin_index,
                        &lines[begin_index],
                    ));
                }
                calendars.push(calendar);
            }
            BLOCK_END => {
                return Err(ParseError::new(ParseErrorKind::NestingMismatch, cursor, raw));
            }
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedRootObject,
                    cursor,
                    raw,
                ));
            }
        }
    }

    tracing::debug!(calendars = calendars.len(), "Parsed iCalendar document");

    Ok(Document { calendars })
}

/// Parses one block. On entry the cursor points at the BEGIN line; on success
/// it has advanced past the matching END line.
///
/// Nested blocks sharing the same discriminator resolve to the nearest
/// matching end at the current depth, so same-name nesting builds a nested
/// tree rather than closing the outer block early.
fn parse_component(lines: &[String], cursor: &mut usize, name: String) -> ParseResult<Component> {
    let begin_index = *cursor;
    *cursor += 1;

    let mut nodes = Vec::new();
    while *cursor < lines.len() {
        let raw = &lines[*cursor];
        if raw.is_empty() {
            *cursor += 1;
            continue;
        }

        let (line_name, value) = split_content_line(raw)
            .ok_or_else(|| ParseError::new(ParseErrorKind::MalformedLine, *cursor, raw))?;

        match line_name {
            BLOCK_BEGIN => {
                let child = parse_component(lines, cursor, unescape_value(value))?;
                nodes.push(Node::Component(child));
            }
            BLOCK_END => {
                if unescape_value(value) == name {
                    *cursor += 1;
                    return Ok(Component { name, nodes });
                }
                // An end line for anything but the innermost open block.
                return Err(ParseError::new(
                    ParseErrorKind::NestingMismatch,
                    *cursor,
                    raw,
                ));
            }
            _ => {
                nodes.push(Node::Property(Property {
                    name: line_name.to_string(),
                    value: unescape_value(value),
                }));
                *cursor += 1;
            }
        }
    }

    Err(ParseError::new(
        ParseErrorKind::UnterminatedBlock,
        begin_index,
        &lines[begin_index],
    ))
}
