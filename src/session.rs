//! MCP session state.
//!
//! Holds the backend client and the default bank every tool call falls back to.

use crate::client::HindsightClient;
use crate::config::Config;
use crate::error::Result;

/// Context passed to tool dispatch.
pub struct McpSession {
    /// Client for the Hindsight backend
    client: HindsightClient,
    /// Bank used when a call does not name one
    default_bank: String,
}

impl McpSession {
    /// Create a session from the resolved configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: HindsightClient::new(config)?,
            default_bank: config.bank_id().to_string(),
        })
    }

    /// Get the backend client.
    pub fn client(&self) -> &HindsightClient {
        &self.client
    }

    /// Get the default bank name.
    pub fn default_bank(&self) -> &str {
        &self.default_bank
    }

    /// The explicit bank if one was given and non-empty, otherwise the default.
    pub fn bank_or_default(&self, bank: Option<String>) -> String {
        bank.filter(|b| !b.is_empty())
            .unwrap_or_else(|| self.default_bank.clone())
    }
}
