//! Error types for the MCP server.

use thiserror::Error;

/// Errors raised while handling MCP requests.
#[derive(Debug, Error)]
pub enum McpError {
    /// Tool name is not in the catalog
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument was not supplied
    #[error("missing required argument '{0}'")]
    MissingArg(String),

    /// An argument was supplied with the wrong shape
    #[error("invalid argument '{name}': {reason}")]
    InvalidArg {
        /// Argument name
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// Hindsight answered with a non-success status
    #[error("Hindsight API error: {status} - {body}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// The request never produced a response
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport IO failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Whether this error comes from argument validation rather than the backend.
    pub fn is_validation(&self) -> bool {
        matches!(self, McpError::MissingArg(_) | McpError::InvalidArg { .. })
    }
}

/// Result type for MCP operations.
pub type Result<T> = std::result::Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_carries_status_and_body() {
        let err = McpError::Backend {
            status: 500,
            body: "boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_errors_are_classified() {
        assert!(McpError::MissingArg("query".into()).is_validation());
        assert!(McpError::InvalidArg {
            name: "limit".into(),
            reason: "bad".into()
        }
        .is_validation());
        assert!(!McpError::UnknownTool("x".into()).is_validation());
    }
}
