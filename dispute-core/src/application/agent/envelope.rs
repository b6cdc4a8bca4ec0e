use super::errors::AgentError;
use serde::Serialize;
use serde_json::{Map, Value};

const CONTEXT_HEADER: &str = "Context Data:";

/// Combine an instruction with its context into the message actually sent.
pub fn compose_message(instruction: &str, context: Option<&Map<String, Value>>) -> String {
    match context {
        Some(context) => {
            // A map of JSON values always serializes.
            let rendered = serde_json::to_string_pretty(context).unwrap_or_default();
            format!("{instruction}\n\n{CONTEXT_HEADER}\n{rendered}")
        }
        None => instruction.to_string(),
    }
}

/// Serialize a wrapper input into the object sent as context data.
pub fn context_map<C: Serialize>(agent: &str, input: &C) -> Result<Map<String, Value>, AgentError> {
    match serde_json::to_value(input) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AgentError::Context {
            agent: agent.to_string(),
            reason: format!("expected a JSON object, got {}", kind_of(&other)),
        }),
        Err(err) => Err(AgentError::Context {
            agent: agent.to_string(),
            reason: err.to_string(),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
