//! Logical line reader for iCalendar (RFC 5545 §3.1).
//!
//! Canonicalizes line endings and reverses continuation folding so the block
//! parser only ever sees whole logical lines.

/// Canonicalizes raw iCalendar text into logical (unfolded) lines.
///
/// Line endings are normalized to CRLF (covering bare-LF and mixed input),
/// every CRLF followed by exactly one SP or HTAB is deleted with no
/// replacement character (RFC 5545 §3.1 unfolding), and the result is split
/// on CRLF. Blank lines are retained as placeholders — the parser skips
/// them, which keeps line indices stable for error reporting.
#[must_use]
pub fn normalize(input: &str) -> Vec<String> {
    unfold(input)
        .split("\r\n")
        .map(ToString::to_string)
        .collect()
}

/// Removes continuation folds in a single pass.
///
/// Works on LF-canonicalized text so a fold is always exactly one line break
/// plus one whitespace marker; scanning once means a deletion can never
/// combine adjacent text into a new fold.
fn unfold(input: &str) -> String {
    let canonical = input.replace("\r\n", "\n");
    let mut result = String::with_capacity(canonical.len());
    let mut chars = canonical.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            if matches!(chars.peek(), Some(' ' | '\t')) {
                // Fold: drop the break and its single marker character.
                chars.next();
            } else {
                result.push_str("\r\n");
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a logical line at the first colon into name and raw value.
pub(super) fn split_content_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
}

/// Unescapes a raw property value.
///
/// Only the reserved text escapes are handled: a literal `\r` is deleted and
/// a literal `\n` becomes a real newline. Every other escape sequence passes
/// through untouched. The single left-to-right scan keeps replacements from
/// combining into new escapes.
pub(super) fn unescape_value(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n') => {
                    chars.next();
                    result.push('\n');
                }
                Some('r') => {
                    chars.next();
                }
                _ => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}
