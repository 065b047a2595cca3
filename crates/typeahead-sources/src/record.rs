//! Turning raw JSON records into [`Hit`]s.

use serde_json::{Map, Value};
use typeahead_core::Hit;

/// Build a hit from a raw record.
///
/// - `id` comes from `objectID` (string or number), falling back to the
///   record's position in the result list.
/// - `label` is the `label_attribute` value; non-string values are rendered
///   as JSON, a missing attribute gives an empty label.
/// - `highlighted` is `_highlightResult.<label_attribute>.value` when present.
pub fn hit_from_record(position: usize, record: Map<String, Value>, label_attribute: &str) -> Hit {
    let id = match record.get("objectID") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => position.to_string(),
    };
    let label = match record.get(label_attribute) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    let highlighted = record
        .get("_highlightResult")
        .and_then(|h| h.get(label_attribute))
        .and_then(|h| h.get("value"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Hit {
        id,
        label,
        highlighted,
        fields: record,
    }
}
