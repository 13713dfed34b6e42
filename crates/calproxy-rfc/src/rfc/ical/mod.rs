//! iCalendar content handling (RFC 5545).
//!
//! Data flows through this module in one direction per request:
//! bytes → [`parse::normalize`] → logical lines → [`parse::parse_document`] →
//! [`core::Document`] → caller mutation → [`build::serialize`] → bytes.
//! Serialization never re-parses its own output.

pub mod build;
pub mod core;
pub mod duration;
pub mod parse;

#[cfg(test)]
mod tests;
