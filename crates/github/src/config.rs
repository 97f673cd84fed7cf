//! Credential configuration.

use serde::Deserialize;
use std::path::Path;

/// Environment variable consulted when no explicit token is configured.
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_PAT";

/// Credential configuration for the GitHub MCP endpoint.
///
/// The token is resolved once, when the client is built: an explicit
/// `token` wins, otherwise the environment variable named by `token_env`
/// is read. An empty token from either source counts as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Explicit personal access token. Takes precedence over the environment.
    pub token: Option<String>,

    /// Environment variable to read when `token` is not set.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            token_env: default_token_env(),
        }
    }
}

impl Config {
    /// Configuration with an explicit token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml: &str) -> std::result::Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve the token: explicit value first, then the environment.
    pub(crate) fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var(&self.token_env).ok())
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
