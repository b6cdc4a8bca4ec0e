use super::errors::AgentError;
use serde::de::DeserializeOwned;

const FENCE: &str = "```";

/// Parse a responder reply into `T`.
///
/// The reply is trimmed, a leading markdown fence (bare or tagged `json`) is
/// removed, and the outermost `{ ... }` span is parsed strictly. Prose around
/// the object is ignored; anything else is an error carrying the parser's
/// message.
pub fn parse_reply<T: DeserializeOwned>(raw: &str) -> Result<T, AgentError> {
    let unfenced = strip_code_fence(raw.trim());
    let candidate = outermost_object(unfenced);
    serde_json::from_str(candidate).map_err(|e| AgentError::MalformedPayload(e.to_string()))
}

pub fn strip_code_fence(text: &str) -> &str {
    if !text.starts_with(FENCE) {
        return text;
    }

    let mut body = text;
    if let Some(newline) = text.find('\n') {
        let tag = text[FENCE.len()..newline].trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("json") {
            body = &text[newline + 1..];
        }
    }

    let trimmed = body.trim_end();
    match trimmed.strip_suffix(FENCE) {
        Some(rest) if rest.is_empty() || rest.ends_with('\n') => rest,
        _ => body,
    }
}

/// Span from the first `{` to the last `}`, or the whole text when there is
/// no such pair.
pub fn outermost_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn parses_plain_object() {
        let value: Value = parse_reply(r#"{"riskLevel":"low","score":15}"#).expect("parse");
        assert_eq!(value, json!({"riskLevel": "low", "score": 15}));
    }

    #[test]
    fn fenced_reply_matches_unfenced() {
        let inner = "{\n  \"matched\": true,\n  \"nested\": {\"list\": [1, 2]}\n}";
        let fenced = format!("```json\n{inner}\n```");
        let bare_fence = format!("```\n{inner}\n```\n");

        let expected: Value = parse_reply(inner).expect("inner");
        assert_eq!(parse_reply::<Value>(&fenced).expect("fenced"), expected);
        assert_eq!(parse_reply::<Value>(&bare_fence).expect("bare"), expected);
    }

    #[test]
    fn uppercase_json_tag_is_accepted() {
        let value: Value = parse_reply("```JSON\n{\"ok\":true}\n```").expect("parse");
        assert_eq!(value, json!({"ok": true}));
    }

    #[test]
    fn prose_around_payload_is_ignored() {
        let reply = "Here is my assessment: {\"summary\":\"fine\",\"detail\":{\"a\":1}} Hope it helps!";
        let value: Value = parse_reply(reply).expect("parse");
        assert_eq!(value, json!({"summary": "fine", "detail": {"a": 1}}));
    }

    #[test]
    fn chatty_fenced_reply_parses() {
        let reply = "Sure, here you go:\n```json\n{\"riskLevel\":\"low\",\"score\":15}\n```\nLet me know if you need more.";
        let value: Value = parse_reply(reply).expect("parse");
        assert_eq!(value, json!({"riskLevel": "low", "score": 15}));
    }

    #[test]
    fn other_language_tag_still_finds_object() {
        let value: Value = parse_reply("```python\n{\"x\": 1}\n```").expect("parse");
        assert_eq!(value, json!({"x": 1}));
    }

    #[test]
    fn invalid_payloads_fail_with_parser_message() {
        for reply in [
            "{invalid json",
            "{\"a\": 1,}",
            "{\"a\": {\"b\": 1}",
            "no braces at all",
            "",
            "} backwards {",
        ] {
            let err = parse_reply::<Value>(reply).expect_err(reply);
            let message = err.to_string();
            assert!(message.starts_with("failed to parse agent response as JSON: "));
            assert!(message.len() > "failed to parse agent response as JSON: ".len());
        }
    }

    #[test]
    fn schema_mismatch_is_malformed() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Score {
            score: u32,
        }

        let err = parse_reply::<Score>(r#"{"score":"high"}"#).expect_err("type mismatch");
        assert!(matches!(err, AgentError::MalformedPayload(_)));
        let err = parse_reply::<Score>(r#"{"other":1}"#).expect_err("missing field");
        assert!(err.to_string().contains("missing field `score`"));
    }

    #[test]
    fn strip_code_fence_leaves_unfenced_text() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}\n");
    }

    #[test]
    fn outermost_object_spans_first_to_last_brace() {
        assert_eq!(outermost_object("x {a} y {b} z"), "{a} y {b}");
        assert_eq!(outermost_object("nothing"), "nothing");
    }
}
