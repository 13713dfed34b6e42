//! iCalendar serialization (RFC 5545).
//!
//! This module provides the write half of the round trip:
//! - Escape: value re-escaping for emission
//! - Fold: content line folding at the 75/74-character budgets
//! - Serializer: tree to logical lines to CRLF bytes

mod escape;
mod fold;
mod serializer;

pub use escape::escape_value;
pub use fold::fold_line;
pub use serializer::serialize;
