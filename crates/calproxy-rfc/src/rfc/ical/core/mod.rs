//! Generic iCalendar node tree (RFC 5545 §3.1, §3.4).

mod node;

pub use node::{Component, Document, Node, Property};

/// Reserved name opening a block.
pub const BLOCK_BEGIN: &str = "BEGIN";
/// Reserved name closing a block. End lines are synthesized during
/// serialization and never stored in the tree.
pub const BLOCK_END: &str = "END";
/// Discriminator required of every top-level block.
pub const CALENDAR_OBJECT: &str = "VCALENDAR";
