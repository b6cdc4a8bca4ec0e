//! Reply text extraction
//!
//! Dispatch endpoints disagree on where the reply lives. The lookup order is
//! fixed: the first of [`REPLY_KEYS`] holding a non-empty value in a
//! top-level JSON object wins; a string value is used as-is, any other value
//! is re-serialized to JSON text. `null` and `""` count as absent. A body that
//! is a JSON string is decoded. Otherwise the whole body is the reply.

use serde_json::Value;

pub const REPLY_KEYS: [&str; 3] = ["response", "message", "reply"];

pub fn extract_reply_text(body: &str) -> String {
    let map = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(Value::String(text)) => return text,
        _ => return body.to_string(),
    };

    for key in REPLY_KEYS {
        match map.get(key) {
            Some(Value::String(text)) if text.is_empty() => continue,
            Some(Value::String(text)) => return text.clone(),
            Some(Value::Null) | None => continue,
            Some(other) => return other.to_string(),
        }
    }

    body.to_string()
}

/// Pull the `error` string out of a failed call's body, if there is one.
pub fn extract_error_text(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body).ok()? {
        Value::Object(map) => map
            .get("error")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string),
        _ => None,
    }
}
