use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

static UID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-f]{64}_[0-9]+").expect("uid pattern is a valid regex")
});

/// Whether a stored value contains a content identifier.
///
/// Values from the database are loosely typed; only strings can hold an
/// identifier, every other variant is reported as not sanitized.
pub fn is_sanitized_entry(entry: &Value) -> bool {
    match entry {
        Value::String(s) => is_sanitized_str(s),
        other => {
            debug!(kind = value_kind(other), "Entry is not a string, not sanitized");
            false
        }
    }
}

/// String form of [`is_sanitized_entry`].
pub fn is_sanitized_str(entry: &str) -> bool {
    UID_PATTERN.is_match(entry)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
