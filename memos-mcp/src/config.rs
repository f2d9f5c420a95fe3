//! Configuration for the Memos MCP server
//!
//! Configuration is read from the environment exactly once at startup and
//! carried as an immutable value. The client and tool handlers receive it by
//! injection so tests can construct distinct configurations without touching
//! process state.

use std::env;

use crate::error::{MemosMcpError, Result};

/// Environment variable naming the Memos instance base URL
pub const ENV_MEMOS_URL: &str = "MEMOS_URL";
/// Environment variable holding the Memos API access token
pub const ENV_MEMOS_API_KEY: &str = "MEMOS_API_KEY";
/// Environment variable overriding the tag applied to untagged memos
pub const ENV_MEMOS_DEFAULT_TAG: &str = "MEMOS_DEFAULT_TAG";

/// Tag applied to new memos when the caller supplies none and no override
/// is configured
const DEFAULT_TAG: &str = "mcp";

/// Immutable configuration for the Memos connection
#[derive(Debug, Clone)]
pub struct MemosConfig {
    /// Base URL of the Memos instance, without a trailing slash
    pub base_url: String,
    /// Bearer token attached to every request
    pub api_key: String,
    /// Tag applied by the create tool when the caller supplies no tags.
    /// `None` disables default tagging entirely.
    pub default_tag: Option<String>,
}

impl MemosConfig {
    /// Create a configuration from explicit values.
    ///
    /// A trailing slash on `base_url` is trimmed so endpoint paths can be
    /// appended verbatim.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        default_tag: Option<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            default_tag: default_tag.filter(|t| !t.is_empty()),
        }
    }

    /// Load the configuration from the environment.
    ///
    /// `MEMOS_URL` and `MEMOS_API_KEY` are required; a missing or empty value
    /// is a startup error. `MEMOS_DEFAULT_TAG` defaults to `"mcp"` when unset;
    /// setting it to the empty string disables default tagging.
    ///
    /// # Errors
    ///
    /// Returns [`MemosMcpError::Config`] naming the missing variable.
    pub fn from_env() -> Result<Self> {
        let base_url = load_required(ENV_MEMOS_URL)?;
        let api_key = load_required(ENV_MEMOS_API_KEY)?;
        let default_tag = match env::var(ENV_MEMOS_DEFAULT_TAG) {
            Ok(tag) => {
                if tag.is_empty() {
                    None
                } else {
                    Some(tag)
                }
            }
            Err(_) => Some(DEFAULT_TAG.to_string()),
        };
        Ok(Self::new(base_url, api_key, default_tag))
    }
}

/// Load a required environment variable, rejecting empty values
fn load_required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(MemosMcpError::Config(format!(
            "environment variable {key} must be set"
        ))),
    }
}
