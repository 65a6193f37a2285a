//! HTTP client for the Hindsight backend.

use reqwest::{Client, Method};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{McpError, Result};

/// Issues single-attempt JSON requests against `{base}/v1/default`.
///
/// No timeout is configured here; a hung backend holds the call until the
/// connection itself fails.
#[derive(Clone)]
pub struct HindsightClient {
    client: Client,
    api_root: String,
}

impl HindsightClient {
    /// Create a client for the configured backend.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("hindsight-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_root: config.api_root(),
        })
    }

    /// The `{base}/v1/default` prefix all endpoints hang off.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Send `method` to `{api_root}{endpoint}` with an optional JSON body.
    ///
    /// A non-success status becomes [`McpError::Backend`] carrying the status
    /// and the response text. A success body is parsed as JSON.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        let url = format!("{}{}", self.api_root, endpoint);
        debug!(%method, %url, "hindsight request");

        let mut req = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "hindsight unreachable");
            McpError::from(e)
        })?;

        let status = res.status();
        if !status.is_success() {
            let body = body_or_placeholder(res.text().await);
            warn!(%method, %url, status = status.as_u16(), "hindsight returned error status");
            return Err(McpError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// POST a JSON body.
    pub async fn post(&self, endpoint: &str, body: &JsonValue) -> Result<JsonValue> {
        self.request(Method::POST, endpoint, Some(body)).await
    }
}

/// The error body text, or a marker naming why it could not be read.
fn body_or_placeholder<E: std::fmt::Display>(text: std::result::Result<String, E>) -> String {
    text.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_error_body_is_named() {
        assert_eq!(body_or_placeholder::<String>(Ok("boom".into())), "boom");
        assert_eq!(
            body_or_placeholder(Err("connection reset")),
            "<unreadable body: connection reset>"
        );
    }
}
