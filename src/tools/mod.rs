//! Tool registry and dispatch.
//!
//! Exposes the three Hindsight memory tools. Every call yields a [`ToolResult`];
//! failures are reported through `isError` instead of a JSON-RPC error.

pub mod memory;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::{info, warn};

use crate::error::McpError;
use crate::session::McpSession;

/// A tool definition for the MCP tools/list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    /// Tool name (e.g., "memory_recall")
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON Schema for the input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonValue,
}

impl ToolDef {
    /// Create a new tool definition.
    pub fn new(name: &str, description: &str, input_schema: JsonValue) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }

    /// Names of the schema's required properties.
    pub fn required(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(JsonValue::as_array)
            .map(|r| r.iter().filter_map(JsonValue::as_str).collect())
            .unwrap_or_default()
    }
}

/// One block of tool output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text
    Text {
        /// The text itself
        text: String,
    },
}

/// The outcome of a tools/call request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Output blocks
    pub content: Vec<ContentBlock>,
    /// Whether the call failed
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    /// A successful single-text result.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// An error-flagged single-text result.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// Map an error to the text shown to the assistant.
    ///
    /// Backend and transport failures carry a hint pointing at `api_root`.
    pub fn from_error(err: &McpError, api_root: &str) -> Self {
        match err {
            McpError::UnknownTool(name) => Self::error(format!("Unknown tool: {name}")),
            e if e.is_validation() => Self::error(format!("Invalid arguments: {e}")),
            e => Self::error(format!(
                "Hindsight error: {e}\n\nMake sure the Hindsight backend is running at {api_root}."
            )),
        }
    }

    /// Concatenated text of all blocks.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|ContentBlock::Text { text }| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Registry of available MCP tools.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
}

impl ToolRegistry {
    /// Create the tool registry with the memory tools.
    pub fn new(default_bank: &str) -> Self {
        Self {
            tools: memory::tools(default_bank),
        }
    }

    /// Get all tool definitions.
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    /// Run a tool call to completion. Never fails; errors become `isError` results.
    pub async fn call(
        &self,
        session: &McpSession,
        name: &str,
        args: Map<String, JsonValue>,
    ) -> ToolResult {
        match memory::dispatch(session, name, args).await {
            Ok(result) => {
                info!(tool = name, "tool call succeeded");
                result
            }
            Err(e) => {
                warn!(tool = name, error = %e, "tool call failed");
                ToolResult::from_error(&e, session.client().api_root())
            }
        }
    }
}
