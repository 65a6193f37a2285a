//! Hindsight memory tools.
//!
//! - `memory_retain`  — store a piece of information in a bank
//! - `memory_recall`  — retrieve memories relevant to a query
//! - `memory_reflect` — have the backend analyse stored memories on a topic
//!
//! Hindsight itself fuses semantic, keyword, graph and temporal retrieval; this
//! module only shapes requests and renders what comes back.

use serde_json::{json, Map, Value as JsonValue};
use tracing::debug;

use crate::convert::{
    format_hits, get_optional_string, get_optional_u64, get_string_arg, pretty_json, recall_hits,
};
use crate::error::{McpError, Result};
use crate::session::McpSession;
use crate::tools::{ToolDef, ToolResult};

/// Recall result count when the caller gives none.
pub const DEFAULT_RECALL_LIMIT: u64 = 5;

/// Get all memory tool definitions.
pub fn tools(default_bank: &str) -> Vec<ToolDef> {
    let bank_id = json!({
        "type": "string",
        "description": format!("Memory bank ID (default: {default_bank})")
    });

    vec![
        ToolDef::new(
            "memory_retain",
            "Save information to the AI agent's long-term memory.\n\n\
             Use it to remember:\n\
             - User preferences (languages, code style, tools)\n\
             - Important decisions and the reasoning behind them\n\
             - Project context and architecture\n\
             - Patterns and best practices from the codebase\n\
             - Errors and how they were fixed",
            json!({
                "type": "object",
                "properties": {
                    "content": {
                        "type": "string",
                        "description": "Information to store in memory"
                    },
                    "context": {
                        "type": "string",
                        "description": "Additional context (project, file, topic)"
                    },
                    "bank_id": bank_id.clone()
                },
                "required": ["content"]
            }),
        ),
        ToolDef::new(
            "memory_recall",
            "Recall information from long-term memory.\n\n\
             Hindsight runs four retrieval strategies in parallel:\n\
             - Semantic: meaning-based search (vector similarity)\n\
             - Keyword: exact keyword matches (BM25)\n\
             - Graph: relations between entities\n\
             - Temporal: time-based filtering\n\n\
             Use it to:\n\
             - Get context about the project or user\n\
             - Find earlier solutions to similar problems\n\
             - Recover architectural decisions",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "What to search memory for"
                    },
                    "limit": {
                        "type": "number",
                        "description": format!(
                            "Maximum number of results (default {DEFAULT_RECALL_LIMIT})"
                        )
                    },
                    "bank_id": bank_id.clone()
                },
                "required": ["query"]
            }),
        ),
        ToolDef::new(
            "memory_reflect",
            "Analyse existing memories and draw conclusions.\n\n\
             Reflect can:\n\
             - Form opinions from accumulated experience\n\
             - Spot patterns in behaviour and preferences\n\
             - Generalise from individual facts\n\
             - Make recommendations based on history\n\n\
             Use it to:\n\
             - Understand the user's general preferences\n\
             - Analyse recurring problems\n\
             - Derive best practices from experience",
            json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Topic to analyse and reflect on"
                    },
                    "bank_id": bank_id
                },
                "required": ["topic"]
            }),
        ),
    ]
}

/// A validated tool call.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    /// `memory_retain`
    Retain {
        /// Text to store
        content: String,
        /// Optional context, never empty
        context: Option<String>,
        /// Explicit bank, if any
        bank_id: Option<String>,
    },
    /// `memory_recall`
    Recall {
        /// Search query
        query: String,
        /// Maximum results, already defaulted
        limit: u64,
        /// Explicit bank, if any
        bank_id: Option<String>,
    },
    /// `memory_reflect`
    Reflect {
        /// Topic to reflect on
        topic: String,
        /// Explicit bank, if any
        bank_id: Option<String>,
    },
}

impl ToolCall {
    /// Validate arguments for the named tool.
    pub fn parse(name: &str, args: &Map<String, JsonValue>) -> Result<Self> {
        match name {
            "memory_retain" => Ok(ToolCall::Retain {
                content: get_string_arg(args, "content")?,
                context: get_optional_string(args, "context")?.filter(|c| !c.is_empty()),
                bank_id: get_bank_arg(args)?,
            }),
            "memory_recall" => Ok(ToolCall::Recall {
                query: get_string_arg(args, "query")?,
                limit: get_optional_u64(args, "limit")?
                    .filter(|&l| l > 0)
                    .unwrap_or(DEFAULT_RECALL_LIMIT),
                bank_id: get_bank_arg(args)?,
            }),
            "memory_reflect" => Ok(ToolCall::Reflect {
                topic: get_string_arg(args, "topic")?,
                bank_id: get_bank_arg(args)?,
            }),
            _ => Err(McpError::UnknownTool(name.to_string())),
        }
    }
}

/// Optional `bank_id`. Dot segments are rejected since URL normalisation would
/// drop them from the request path even when percent-encoded.
fn get_bank_arg(args: &Map<String, JsonValue>) -> Result<Option<String>> {
    let bank = get_optional_string(args, "bank_id")?;
    if matches!(bank.as_deref(), Some(".") | Some("..")) {
        return Err(McpError::InvalidArg {
            name: "bank_id".to_string(),
            reason: "'.' and '..' are not valid bank names".to_string(),
        });
    }
    Ok(bank)
}

/// `/banks/{bank}{suffix}` with the bank percent-encoded as one path segment.
fn bank_endpoint(bank: &str, suffix: &str) -> String {
    format!("/banks/{}{suffix}", urlencoding::encode(bank))
}

/// Dispatch a memory tool call.
pub async fn dispatch(
    session: &McpSession,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<ToolResult> {
    match ToolCall::parse(name, &args)? {
        ToolCall::Retain {
            content,
            context,
            bank_id,
        } => retain(session, content, context, bank_id).await,
        ToolCall::Recall {
            query,
            limit,
            bank_id,
        } => recall(session, query, limit, bank_id).await,
        ToolCall::Reflect { topic, bank_id } => reflect(session, topic, bank_id).await,
    }
}

// ── Retain ───────────────────────────────────────────────────────────────

async fn retain(
    session: &McpSession,
    content: String,
    context: Option<String>,
    bank_id: Option<String>,
) -> Result<ToolResult> {
    let bank = session.bank_or_default(bank_id);

    let mut item = Map::new();
    item.insert("content".to_string(), JsonValue::String(content));
    if let Some(context) = context {
        item.insert("context".to_string(), JsonValue::String(context));
    }

    let body = json!({
        "items": [item],
        "async": false,
    });
    let result = session
        .client()
        .post(&bank_endpoint(&bank, "/memories"), &body)
        .await?;

    Ok(ToolResult::text(format!(
        "Saved to memory (bank: {bank}):\n{}",
        pretty_json(&result)
    )))
}

// ── Recall ───────────────────────────────────────────────────────────────

async fn recall(
    session: &McpSession,
    query: String,
    limit: u64,
    bank_id: Option<String>,
) -> Result<ToolResult> {
    let bank = session.bank_or_default(bank_id);

    let body = json!({
        "query": query,
        "limit": limit,
    });
    let result = session
        .client()
        .post(&bank_endpoint(&bank, "/memories/recall"), &body)
        .await?;

    let hits = recall_hits(&result);
    debug!(bank = %bank, hits = hits.len(), "recall finished");

    if hits.is_empty() {
        return Ok(ToolResult::text(format!(
            "Nothing found in memory for query: \"{query}\""
        )));
    }

    Ok(ToolResult::text(format!(
        "Found {} memories (bank: {bank}):\n\n{}",
        hits.len(),
        format_hits(&hits)
    )))
}

// ── Reflect ──────────────────────────────────────────────────────────────

async fn reflect(
    session: &McpSession,
    topic: String,
    bank_id: Option<String>,
) -> Result<ToolResult> {
    let bank = session.bank_or_default(bank_id);

    let body = json!({ "topic": topic });
    let result = session
        .client()
        .post(&bank_endpoint(&bank, "/reflect"), &body)
        .await?;

    Ok(ToolResult::text(format!(
        "Memory analysis for topic \"{topic}\":\n{}",
        pretty_json(&result)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: JsonValue) -> Map<String, JsonValue> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn catalog_declares_required_fields() {
        let defs = tools("claude-code-memory");
        assert_eq!(defs.len(), 3);
        assert_eq!(defs[0].required(), ["content"]);
        assert_eq!(defs[1].required(), ["query"]);
        assert_eq!(defs[2].required(), ["topic"]);
        for def in &defs {
            assert!(def.input_schema["properties"]["bank_id"].is_object());
        }
        assert!(defs[0].input_schema["properties"]["context"].is_object());
        assert_eq!(
            defs[1].input_schema["properties"]["limit"]["type"],
            "number"
        );
    }

    #[test]
    fn recall_limit_defaults_to_five() {
        let call = ToolCall::parse("memory_recall", &args(json!({"query": "q"}))).unwrap();
        assert_eq!(
            call,
            ToolCall::Recall {
                query: "q".into(),
                limit: 5,
                bank_id: None
            }
        );

        let call =
            ToolCall::parse("memory_recall", &args(json!({"query": "q", "limit": 12}))).unwrap();
        assert!(matches!(call, ToolCall::Recall { limit: 12, .. }));
    }

    #[test]
    fn retain_drops_empty_context() {
        let call = ToolCall::parse(
            "memory_retain",
            &args(json!({"content": "x", "context": ""})),
        )
        .unwrap();
        assert!(matches!(call, ToolCall::Retain { context: None, .. }));
    }

    #[test]
    fn missing_required_argument_is_rejected() {
        let err = ToolCall::parse("memory_reflect", &Map::new()).unwrap_err();
        assert!(matches!(err, McpError::MissingArg(ref f) if f == "topic"));
    }

    #[test]
    fn bank_is_encoded_as_one_segment() {
        assert_eq!(bank_endpoint("team-a", "/reflect"), "/banks/team-a/reflect");
        assert_eq!(
            bank_endpoint("a/b?c#d", "/memories"),
            "/banks/a%2Fb%3Fc%23d/memories"
        );
    }

    #[test]
    fn dot_segment_banks_are_rejected() {
        for bank in [".", ".."] {
            let err = ToolCall::parse(
                "memory_reflect",
                &args(json!({"topic": "t", "bank_id": bank})),
            )
            .unwrap_err();
            assert!(matches!(err, McpError::InvalidArg { ref name, .. } if name == "bank_id"));
        }
    }

    #[test]
    fn unknown_tool_is_rejected() {
        let err = ToolCall::parse("memory_unknown", &Map::new()).unwrap_err();
        assert!(matches!(err, McpError::UnknownTool(ref n) if n == "memory_unknown"));
    }
}
