//! Tree-to-text serialization.

use super::escape::escape_value;
use super::fold::fold_line;
use crate::rfc::ical::core::{BLOCK_BEGIN, BLOCK_END, Component, Document, Node, Property};

/// Serializes a document to its RFC 5545 byte representation.
///
/// Emission walks the tree in order, synthesizing an `END:<name>` line after
/// each block body, then folds every logical line and joins them with CRLF.
/// Never fails on a tree produced by the parser; its output is never
/// re-parsed here.
///
/// # Panics
/// Panics if the tree stores a property under a reserved structural name.
/// See [`encode_property`].
#[must_use]
pub fn serialize(document: &Document) -> Vec<u8> {
    let mut lines = Vec::new();
    for calendar in &document.calendars {
        encode_component(calendar, &mut lines);
    }
    renormalize(&lines)
}

/// Joins logical lines into folded, CRLF-terminated bytes.
fn renormalize(lines: &[String]) -> Vec<u8> {
    let mut buf = String::new();
    for line in lines {
        buf.push_str(&fold_line(line));
        buf.push_str("\r\n");
    }
    buf.into_bytes()
}

fn encode_component(component: &Component, lines: &mut Vec<String>) {
    lines.push(content_line(BLOCK_BEGIN, &component.name));
    for node in &component.nodes {
        match node {
            Node::Property(property) => lines.push(encode_property(property)),
            Node::Component(child) => encode_component(child, lines),
        }
    }
    // The end line is synthesized here; it never exists in the tree.
    lines.push(content_line(BLOCK_END, &component.name));
}

/// Encodes a single leaf property.
///
/// # Panics
/// Panics if the property name is the reserved `BEGIN` or `END` keyword.
/// Blocks are represented as components and end lines are synthesized during
/// serialization, so such a tree is a caller-contract violation — the parser
/// can never produce one — and must not be conflated with a data error.
fn encode_property(property: &Property) -> String {
    assert!(
        property.name != BLOCK_BEGIN && property.name != BLOCK_END,
        "{BLOCK_BEGIN}/{BLOCK_END} are structural names and cannot be stored as properties",
    );
    content_line(&property.name, &property.value)
}

fn content_line(name: &str, value: &str) -> String {
    format!("{name}:{}", escape_value(value))
}
