//! Argument extraction and result rendering.
//!
//! Helpers for pulling typed values out of tool-call arguments, and for turning
//! backend JSON into the text blocks returned to the assistant.

use serde_json::{Map, Value as JsonValue};

use crate::error::{McpError, Result};

/// Helper to get a required string argument from JSON arguments.
pub fn get_string_arg(args: &Map<String, JsonValue>, name: &str) -> Result<String> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Err(McpError::MissingArg(name.to_string())),
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(_) => Err(McpError::InvalidArg {
            name: name.to_string(),
            reason: "expected a string".to_string(),
        }),
    }
}

/// Helper to get an optional string argument. Null counts as absent.
pub fn get_optional_string(args: &Map<String, JsonValue>, name: &str) -> Result<Option<String>> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(McpError::InvalidArg {
            name: name.to_string(),
            reason: "expected a string".to_string(),
        }),
    }
}

/// Helper to get an optional non-negative integer argument.
///
/// Integral floats such as `10.0` are accepted since clients often send
/// numbers untyped.
pub fn get_optional_u64(args: &Map<String, JsonValue>, name: &str) -> Result<Option<u64>> {
    let invalid = || McpError::InvalidArg {
        name: name.to_string(),
        reason: "expected a non-negative integer".to_string(),
    };
    match args.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => {
            if let Some(v) = n.as_u64() {
                return Ok(Some(v));
            }
            match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                    Ok(Some(f as u64))
                }
                _ => Err(invalid()),
            }
        }
        Some(_) => Err(invalid()),
    }
}

/// Pretty-print a backend response with two-space indentation.
pub fn pretty_json(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// A single recall hit, pulled leniently out of the backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct RecallHit {
    /// Memory text
    pub text: String,
    /// Entity names attached to the memory, if the backend sent any
    pub entities: Option<Vec<String>>,
}

/// Extract `results: [{text, entities?}]` from a recall response.
///
/// Missing or non-array `results` yields an empty list.
pub fn recall_hits(response: &JsonValue) -> Vec<RecallHit> {
    let Some(results) = response.get("results").and_then(JsonValue::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .map(|r| {
            let text = match r.get("text") {
                Some(JsonValue::String(s)) => s.clone(),
                Some(JsonValue::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            let entities = r.get("entities").and_then(JsonValue::as_array).map(|list| {
                list.iter()
                    .map(|e| match e {
                        JsonValue::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            });
            RecallHit { text, entities }
        })
        .collect()
}

/// Render hits as `"{n}. {text} [{entities}]"` entries separated by blank lines.
pub fn format_hits(hits: &[RecallHit]) -> String {
    hits.iter()
        .enumerate()
        .map(|(i, hit)| match &hit.entities {
            Some(entities) => format!("{}. {} [{}]", i + 1, hit.text, entities.join(", ")),
            None => format!("{}. {}", i + 1, hit.text),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: JsonValue) -> Map<String, JsonValue> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn string_args() {
        let a = args(json!({"q": "hello", "n": 3, "z": null}));
        assert_eq!(get_string_arg(&a, "q").unwrap(), "hello");
        assert!(matches!(get_string_arg(&a, "missing"), Err(McpError::MissingArg(_))));
        assert!(matches!(get_string_arg(&a, "z"), Err(McpError::MissingArg(_))));
        assert!(matches!(get_string_arg(&a, "n"), Err(McpError::InvalidArg { .. })));
        assert_eq!(get_optional_string(&a, "z").unwrap(), None);
    }

    #[test]
    fn u64_args() {
        let a = args(json!({"a": 7, "b": 10.0, "c": 2.5, "d": -1, "e": "5"}));
        assert_eq!(get_optional_u64(&a, "a").unwrap(), Some(7));
        assert_eq!(get_optional_u64(&a, "b").unwrap(), Some(10));
        assert_eq!(get_optional_u64(&a, "missing").unwrap(), None);
        assert!(get_optional_u64(&a, "c").is_err());
        assert!(get_optional_u64(&a, "d").is_err());
        assert!(get_optional_u64(&a, "e").is_err());
    }

    #[test]
    fn formats_hits_with_and_without_entities() {
        let response = json!({
            "results": [
                {"text": "a"},
                {"text": "b", "entities": ["E1", "E2"]}
            ]
        });
        let hits = recall_hits(&response);
        assert_eq!(hits.len(), 2);
        assert_eq!(format_hits(&hits), "1. a\n\n2. b [E1, E2]");
    }

    #[test]
    fn missing_results_is_empty() {
        assert!(recall_hits(&json!({})).is_empty());
        assert!(recall_hits(&json!({"results": null})).is_empty());
        assert!(recall_hits(&json!({"results": []})).is_empty());
    }
}
