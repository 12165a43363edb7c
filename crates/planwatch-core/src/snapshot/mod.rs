//! Snapshot codec.
//!
//! A snapshot is the JSON array of lesson records captured on one run and
//! fed back verbatim as the "old" plan on the next run.

pub mod codec;

pub use codec::{
    comparison_to_json, parse_comparison_bytes, parse_messages_bytes, parse_plan_bytes,
    plan_to_json,
};
