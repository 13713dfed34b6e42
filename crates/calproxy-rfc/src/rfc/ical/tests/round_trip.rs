//! Round-trip parsing and serialization tests.
//!
//! These verify the core guarantee: well-formed iCalendar text comes back
//! byte-for-byte after a parse/serialize cycle, and a second cycle is
//! structurally a no-op.

use super::fixtures::{CALENDAR_MINIMAL, CALENDAR_WITH_ALARM, CALENDAR_WITH_ESCAPES};
use crate::rfc::ical::core::Document;

/// Parse and serialize, returning the output as text.
fn round_trip(input: &str) -> String {
    let document = Document::parse(input).expect("input should parse");
    String::from_utf8(document.to_bytes()).expect("serializer emits UTF-8")
}

#[test_log::test]
fn round_trip_minimal_is_byte_identical() {
    assert_eq!(round_trip(CALENDAR_MINIMAL), CALENDAR_MINIMAL);
}

#[test_log::test]
fn round_trip_escapes_is_byte_identical() {
    assert_eq!(round_trip(CALENDAR_WITH_ESCAPES), CALENDAR_WITH_ESCAPES);
}

#[test_log::test]
fn round_trip_nested_blocks_is_byte_identical() {
    assert_eq!(round_trip(CALENDAR_WITH_ALARM), CALENDAR_WITH_ALARM);
}

#[test_log::test]
fn round_trip_is_idempotent() {
    let first = Document::parse(CALENDAR_WITH_ESCAPES).expect("first parse");
    let output = String::from_utf8(first.to_bytes()).expect("serializer emits UTF-8");
    let second = Document::parse(&output).expect("second parse");
    assert_eq!(first, second);
}

#[test_log::test]
fn round_trip_folded_line_is_byte_identical() {
    // A 112-character logical line folds as 75 characters, CRLF, a space,
    // and the remaining 37; input folded that way must come back unchanged.
    let long_value = "A".repeat(100);
    let logical = format!("DESCRIPTION:{long_value}");
    let (head, tail) = logical.split_at(75);
    let input = format!(
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\n{head}\r\n {tail}\r\nEND:VCALENDAR\r\n"
    );

    assert_eq!(round_trip(&input), input);
}

#[test_log::test]
fn line_at_seventy_five_characters_stays_unfolded() {
    let summary = format!("SUMMARY:{}", "A".repeat(67));
    assert_eq!(summary.len(), 75);
    let input = format!("BEGIN:VCALENDAR\r\n{summary}\r\nEND:VCALENDAR\r\n");

    assert_eq!(round_trip(&input), input);
}

#[test_log::test]
fn line_at_seventy_six_characters_folds_once() {
    let summary = format!("SUMMARY:{}", "A".repeat(68));
    assert_eq!(summary.len(), 76);
    let input = format!("BEGIN:VCALENDAR\r\n{summary}\r\nEND:VCALENDAR\r\n");

    let (head, tail) = summary.split_at(75);
    let expected = format!("BEGIN:VCALENDAR\r\n{head}\r\n {tail}\r\nEND:VCALENDAR\r\n");
    assert_eq!(round_trip(&input), expected);
}

#[test_log::test]
fn bare_lf_input_is_canonicalized_to_crlf() {
    let input = CALENDAR_MINIMAL.replace("\r\n", "\n");
    assert_eq!(round_trip(&input), CALENDAR_MINIMAL);
}

#[test_log::test]
fn blank_lines_are_dropped_on_serialize() {
    let input = CALENDAR_MINIMAL.replace(
        "SUMMARY:Test Event\r\n",
        "SUMMARY:Test Event\r\n\r\n",
    );
    assert_eq!(round_trip(&input), CALENDAR_MINIMAL);
}
