//! Client error types.

use mcp::ServiceError;
use thiserror::Error;

/// Errors from the GitHub MCP client.
#[derive(Debug, Error)]
pub enum Error {
    /// No personal access token could be resolved at construction time.
    ///
    /// Fatal to the `connect` call; supply a token explicitly or via the
    /// named environment variable and retry.
    #[error("GitHub personal access token missing: set one explicitly or via ${0}")]
    MissingCredential(String),

    /// Transport-level failure while establishing the connection.
    #[error("failed to connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: ServiceError,
    },

    /// A remote call failed after the connection was established.
    #[error("remote call '{operation}' failed: {source}")]
    Invocation {
        operation: String,
        #[source]
        source: ServiceError,
    },

    /// An operation that needs a live session was called before `connect`.
    #[error("not connected: call connect() first")]
    NotConnected,
}

pub type Result<T> = std::result::Result<T, Error>;
