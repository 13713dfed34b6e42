//! Module-level tests exercising the whole parse/serialize pipeline.

mod mutation;
mod round_trip;
