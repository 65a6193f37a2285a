//! # hindsight-mcp
//!
//! MCP (Model Context Protocol) server giving AI coding assistants long-term memory
//! backed by a Hindsight service.
//!
//! The server speaks JSON-RPC 2.0 over stdin/stdout and forwards tool calls to the
//! Hindsight HTTP API at `{HINDSIGHT_URL}/v1/default`.
//!
//! ## Tools
//!
//! `memory_retain`, `memory_recall`, `memory_reflect`
//!
//! ## Usage
//!
//! The server is typically run as an executable and configured in the assistant:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "hindsight": {
//!       "command": "/path/to/hindsight-mcp",
//!       "env": { "HINDSIGHT_URL": "http://localhost:8888", "MEMORY_BANK_ID": "my-bank" }
//!     }
//!   }
//! }
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use hindsight_mcp::{Config, McpServer, McpSession};
//!
//! # async fn run() -> hindsight_mcp::Result<()> {
//! let config = Config::from_env();
//! let session = McpSession::new(&config)?;
//! let server = McpServer::new(session);
//! server.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod convert;
mod error;
mod server;
mod session;
mod tools;

pub use client::HindsightClient;
pub use config::{Config, API_VERSION, DEFAULT_BANK_ID, DEFAULT_BASE_URL, NAMESPACE};
pub use convert::{format_hits, recall_hits, RecallHit};
pub use error::{McpError, Result};
pub use server::{JsonRpcRequest, JsonRpcResponse, McpServer, SERVER_NAME, SERVER_VERSION};
pub use session::McpSession;
pub use tools::memory::{ToolCall, DEFAULT_RECALL_LIMIT};
pub use tools::{ContentBlock, ToolDef, ToolRegistry, ToolResult};
