//! Calendar fetching and transformation services for calproxy.
//!
//! Consumers of the core contract: fetch upstream bytes, parse them into a
//! document, mutate the tree in place, and hand it back for serialization.
//! Each request owns its document exclusively from parse to serialize.

pub mod calendar;
pub mod error;
pub mod transform;
pub mod upstream;
