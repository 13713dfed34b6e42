//! RFC 5545 (iCalendar) text handling for calproxy.
//!
//! The crate round-trips well-formed iCalendar text through a generic node
//! tree: bytes are canonicalized into logical lines, parsed into a
//! [`Document`], mutated in place by callers, and serialized back to folded
//! CRLF bytes. A small formatter renders signed spans as RFC 5545 DURATION
//! values.

pub mod rfc;

pub use rfc::ical::core::{Component, Document, Node, Property};
pub use rfc::ical::duration::{DurationError, format_duration};
pub use rfc::ical::parse::{ParseError, ParseErrorKind};
