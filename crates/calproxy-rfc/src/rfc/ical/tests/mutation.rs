//! In-place mutation through the programmatic boundary.
//!
//! A parsed document is edited by external callers between parse and
//! serialize; these tests exercise that contract the way the proxy uses it.

use super::fixtures::{CALENDAR_MINIMAL, CALENDAR_WITH_TTL};
use crate::rfc::ical::core::{Document, Node, Property};

#[test_log::test]
fn value_edits_show_up_in_the_output() {
    let mut document = Document::parse(CALENDAR_WITH_TTL).expect("fixture parses");

    for calendar in &mut document.calendars {
        for property in calendar.properties_mut() {
            if property.name == "X-PUBLISHED-TTL" {
                property.value = "PT15M0S".to_string();
            }
        }
    }

    let output = String::from_utf8(document.to_bytes()).expect("serializer emits UTF-8");
    assert!(output.contains("X-PUBLISHED-TTL:PT15M0S\r\n"));
    // The parameterized refresh property was not an exact name match.
    assert!(output.contains("REFRESH-INTERVAL;VALUE=DURATION:PT1H\r\n"));
}

#[test_log::test]
fn prefix_query_matches_parameterized_names() {
    let input = CALENDAR_MINIMAL.replace(
        "DTEND:20260123T150000Z\r\n",
        "DTEND;TZID=America/New_York:20260123T150000Z\r\n",
    );
    let document = Document::parse(&input).expect("input parses");

    let event = document.calendars[0].components().next().expect("event");
    let dtend = event
        .properties()
        .find(|p| p.name_has_prefix("DTEND"))
        .expect("prefix match finds the parameterized DTEND");
    assert_eq!(dtend.name, "DTEND;TZID=America/New_York");
    assert!(!dtend.name_has_prefix("DURATION"));
}

#[test_log::test]
fn structural_edits_preserve_surrounding_order() {
    let mut document = Document::parse(CALENDAR_MINIMAL).expect("fixture parses");

    for calendar in &mut document.calendars {
        for event in calendar.components_mut() {
            event.nodes.retain(|node| {
                node.as_property()
                    .is_none_or(|p| !p.name_has_prefix("DTEND"))
            });
            event.add_property(Property::new("DURATION", "PT1H"));
        }
    }

    let output = String::from_utf8(document.to_bytes()).expect("serializer emits UTF-8");
    let expected = CALENDAR_MINIMAL
        .replace("DTEND:20260123T150000Z\r\n", "")
        .replace("END:VEVENT", "DURATION:PT1H\r\nEND:VEVENT");
    assert_eq!(output, expected);
}

#[test_log::test]
fn multiline_values_are_escaped_after_edits() {
    let mut document = Document::parse(CALENDAR_MINIMAL).expect("fixture parses");

    let event = document.calendars[0]
        .components_mut()
        .next()
        .expect("event");
    event.nodes.push(Node::Property(Property::new(
        "DESCRIPTION",
        "first line\nsecond line",
    )));

    let output = String::from_utf8(document.to_bytes()).expect("serializer emits UTF-8");
    assert!(output.contains("DESCRIPTION:first line\\nsecond line\r\n"));
}
