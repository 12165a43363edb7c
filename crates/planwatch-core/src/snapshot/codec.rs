//! JSON encoding and decoding of lesson plans, comparisons and captured messages.

use crate::errors::{ExError, ExErrorKind};
use crate::model::{LessonPlan, LessonPlanComparison, Message};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Decode raw bytes into a JSON array, validating UTF-8 and the root shape first.
fn parse_array_root(bytes: &[u8], op: &str) -> Result<Value, ExError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op(op)
            .with_message(format!("snapshot is not valid UTF-8: {}", e))
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op(op)
            .with_message(format!("snapshot is not valid JSON: {}", e))
    })?;

    if !raw.is_array() {
        return Err(ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op(op)
            .with_message("snapshot JSON root must be an array"));
    }

    Ok(raw)
}

fn decode_typed<T: DeserializeOwned>(raw: Value, op: &str) -> Result<T, ExError> {
    serde_json::from_value(raw).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op(op)
            .with_message(format!("malformed record: {}", e))
    })
}

fn encode_pretty<T: Serialize>(value: &T, op: &str) -> Result<String, ExError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op(op)
            .with_message(format!("failed to serialize: {}", e))
    })
}

/// Parse snapshot bytes into a [`LessonPlan`].
///
/// # Errors
///
/// - `InvalidSnapshot`: bytes are not UTF-8, not JSON, the root is not an
///   array, or a record misses a required field / has a wrong type
pub fn parse_plan_bytes(bytes: &[u8]) -> Result<LessonPlan, ExError> {
    let raw = parse_array_root(bytes, "parse_plan_bytes")?;
    decode_typed(raw, "parse_plan_bytes")
}

/// Serialize a plan into the snapshot format (pretty JSON, 2-space indent).
///
/// # Errors
///
/// - `Serialization`: JSON encoding failed
pub fn plan_to_json(plan: &LessonPlan) -> Result<String, ExError> {
    encode_pretty(plan, "plan_to_json")
}

/// Parse a stored or expected comparison (array of `{before, after}` pairs).
///
/// # Errors
///
/// - `InvalidSnapshot`: malformed document, or a pair with both sides null
pub fn parse_comparison_bytes(bytes: &[u8]) -> Result<LessonPlanComparison, ExError> {
    let raw = parse_array_root(bytes, "parse_comparison_bytes")?;
    decode_typed(raw, "parse_comparison_bytes")
}

/// Serialize a comparison as an array of `{before, after}` pairs.
///
/// # Errors
///
/// - `Serialization`: JSON encoding failed
pub fn comparison_to_json(comparison: &LessonPlanComparison) -> Result<String, ExError> {
    encode_pretty(comparison, "comparison_to_json")
}

/// Parse captured inbox messages (array of message records).
///
/// # Errors
///
/// - `InvalidSnapshot`: malformed document or record (including unparseable `sent_at`)
pub fn parse_messages_bytes(bytes: &[u8]) -> Result<Vec<Message>, ExError> {
    let raw = parse_array_root(bytes, "parse_messages_bytes")?;
    decode_typed(raw, "parse_messages_bytes")
}
