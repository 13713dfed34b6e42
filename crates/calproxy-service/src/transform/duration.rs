//! Per-event duration rewriting.
//!
//! An event description may carry a `Calendar::Duration=<span>` directive
//! (human-readable span syntax such as `1d`, `2h`, `1h30m`, `15m30s`). The
//! directive is stripped from the description, any end-time or duration
//! properties are displaced, and a single DURATION property is appended —
//! the directive's value when present and valid, one hour otherwise.

use std::sync::OnceLock;

use calproxy_rfc::{Component, Document, Property, format_duration};
use chrono::TimeDelta;
use regex::Regex;
use thiserror::Error;

/// Component name of the rewritten events.
const EVENT_OBJECT: &str = "VEVENT";
/// Description property carrying the directive.
const DESCRIPTION_PROPERTY: &str = "DESCRIPTION";
/// Property appended to each event.
const DURATION_PROPERTY: &str = "DURATION";
/// Property name prefixes displaced by the appended duration; prefixes so
/// parameterized variants like `DTEND;TZID=...` are caught too.
const DISPLACED_PREFIXES: [&str; 2] = ["DTEND", "DURATION"];
/// Duration applied when an event carries no directive.
const DEFAULT_DURATION: &str = "PT1H";

const DIRECTIVE_RE: &str = r"(?:^|\s+)Calendar::Duration=(\S+)\s*";

fn directive_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(DIRECTIVE_RE).expect("directive pattern is valid"))
}

/// Errors extracting a duration directive from a description.
///
/// Never escapes this module: anything but [`DirectiveError::NotFound`] is
/// reported back to the calendar owner as a warning inside the description,
/// so one broken event cannot fail the whole request.
#[derive(Error, Debug)]
enum DirectiveError {
    #[error("duration not specified in event description")]
    NotFound,

    #[error("multiple durations specified")]
    Multiple,

    #[error("invalid duration {input:?}: {reason}")]
    Invalid { input: String, reason: String },
}

impl DirectiveError {
    fn invalid(input: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Rewrites the duration of every event in the document.
#[tracing::instrument(skip(document))]
pub fn apply_event_durations(document: &mut Document) {
    for calendar in &mut document.calendars {
        for event in calendar.components_mut() {
            if event.name == EVENT_OBJECT {
                rewrite_event(event);
            }
        }
    }
}

fn rewrite_event(event: &mut Component) {
    let mut duration: Option<String> = None;

    for property in event.properties_mut() {
        if property.name == DESCRIPTION_PROPERTY {
            match parse_directive(&property.value) {
                Ok(formatted) => duration = Some(formatted),
                Err(DirectiveError::NotFound) => {}
                Err(error) => {
                    tracing::debug!(%error, "Rejecting duration directive");
                    property
                        .value
                        .push_str(&format!("\n\nwarning: calproxy: parse duration: {error}"));
                }
            }
            property.value = directive_regex()
                .replace_all(&property.value, "")
                .into_owned();
        }
    }

    event.nodes.retain(|node| {
        node.as_property().is_none_or(|property| {
            !DISPLACED_PREFIXES
                .iter()
                .any(|prefix| property.name_has_prefix(prefix))
        })
    });

    event.add_property(Property::new(
        DURATION_PROPERTY,
        duration.unwrap_or_else(|| DEFAULT_DURATION.to_string()),
    ));
}

/// Extracts the directive from a description and renders it as an RFC 5545
/// duration.
fn parse_directive(description: &str) -> Result<String, DirectiveError> {
    let captures: Vec<_> = directive_regex().captures_iter(description).collect();
    match captures.as_slice() {
        [] => Err(DirectiveError::NotFound),
        [only] => {
            let input = &only[1];
            let span = humantime::parse_duration(input)
                .map_err(|error| DirectiveError::invalid(input, error))?;
            let span =
                TimeDelta::from_std(span).map_err(|error| DirectiveError::invalid(input, error))?;
            format_duration(span).map_err(|error| DirectiveError::invalid(input, error))
        }
        _ => Err(DirectiveError::Multiple),
    }
}
