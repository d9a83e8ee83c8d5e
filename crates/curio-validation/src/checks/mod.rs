//! Individual validation checks.
//!
//! Each check is a free function from a raw question record to a list of
//! issues. Records are raw `serde_json::Value` maps so a malformed record
//! is graded, never a deserialization fault.

pub mod consistency;
pub mod convention;
pub mod length;
pub mod red_flags;
pub mod schema;

use curio_core::constants::CHOICE_COUNT;
use serde_json::Value;

/// The record's `id`, or a placeholder for records that lack one.
pub(crate) fn question_id(q: &Value) -> String {
    q.get("id")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

/// A string-array field as `&str` items, if present and well-shaped.
pub(crate) fn string_array<'a>(q: &'a Value, field: &str) -> Option<Vec<&'a str>> {
    let items = q.get(field)?.as_array()?;
    items.iter().map(Value::as_str).collect()
}

/// The `correct_answer` field as a valid choice index, if in range.
pub(crate) fn correct_index(q: &Value) -> Option<usize> {
    let idx = q.get("correct_answer")?.as_i64()?;
    usize::try_from(idx).ok().filter(|i| *i < CHOICE_COUNT)
}
