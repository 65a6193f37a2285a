//! Backend endpoint and default bank resolution.

/// Hindsight API version path segment.
pub const API_VERSION: &str = "v1";
/// Hindsight namespace path segment.
pub const NAMESPACE: &str = "default";
/// Backend URL used when `HINDSIGHT_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";
/// Memory bank used when `MEMORY_BANK_ID` is unset.
pub const DEFAULT_BANK_ID: &str = "claude-code-memory";

/// Environment variable naming the backend base URL.
pub const URL_ENV: &str = "HINDSIGHT_URL";
/// Environment variable naming the default memory bank.
pub const BANK_ENV: &str = "MEMORY_BANK_ID";

/// Immutable server configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    bank_id: String,
}

impl Config {
    /// Build a config from explicit values. Empty values fall back to the defaults.
    pub fn new(base_url: Option<String>, bank_id: Option<String>) -> Self {
        let base_url = non_empty(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let bank_id = non_empty(bank_id).unwrap_or_else(|| DEFAULT_BANK_ID.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bank_id,
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(lookup(URL_ENV), lookup(BANK_ENV))
    }

    /// Replace fields with explicitly given non-empty values, e.g. command-line flags.
    pub fn with_overrides(self, base_url: Option<String>, bank_id: Option<String>) -> Self {
        Self::new(
            non_empty(base_url).or(Some(self.base_url)),
            non_empty(bank_id).or(Some(self.bank_id)),
        )
    }

    /// Backend base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default memory bank.
    pub fn bank_id(&self) -> &str {
        &self.bank_id
    }

    /// `{base_url}/v1/default`, the prefix of every backend endpoint.
    pub fn api_root(&self) -> String {
        format!("{}/{}/{}", self.base_url, API_VERSION, NAMESPACE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
