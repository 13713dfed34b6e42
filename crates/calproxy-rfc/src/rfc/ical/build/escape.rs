//! Value escaping for emission.

/// Re-escapes a value for emission on a logical line.
///
/// Real carriage returns are dropped and real newlines become the literal
/// `\n` escape; everything else is emitted verbatim. Exactly reverses the
/// parser's unescaping for values that round-trip.
#[must_use]
pub fn escape_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\r' => {}
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result
}
