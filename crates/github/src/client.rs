//! GitHub MCP client: connect, list tools, create pull requests.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pull_request::PullRequest;
use mcp::{CallToolResult, Connector, HttpConnector, Tool, ToolService};
use tracing::{error, info, warn};

/// The hosted GitHub MCP endpoint.
pub const ENDPOINT: &str = "https://api.githubcopilot.com/mcp/";

/// Remote tool invoked by [`Client::create_pull_request`].
const CREATE_PULL_REQUEST_TOOL: &str = "github_create_pull_request";

/// Client for the GitHub MCP server.
///
/// Owns the credential and, once [`Client::connect`] has succeeded, the live
/// session. One session per client; release it with [`Client::close`].
/// Callers wanting concurrent tool calls create one client per flow.
pub struct Client<C: Connector = HttpConnector> {
    token: Option<String>,
    token_env: String,
    connector: C,
    service: Option<C::Service>,
}

impl Client {
    /// Client over the default streamable-HTTP transport.
    pub fn new(config: Config) -> Self {
        Self::with_connector(config, HttpConnector)
    }
}

impl<C: Connector> Client<C> {
    /// Client over a custom connector.
    ///
    /// The credential is resolved here, once: an explicit config token wins,
    /// otherwise the configured environment variable is read.
    pub fn with_connector(config: Config, connector: C) -> Self {
        let token = config.resolve_token();
        Self {
            token,
            token_env: config.token_env,
            connector,
            service: None,
        }
    }

    /// Whether a session is currently open.
    pub fn is_connected(&self) -> bool {
        self.service.is_some()
    }

    /// Establish an authenticated session with the endpoint.
    ///
    /// Fails with [`Error::MissingCredential`] before any network activity
    /// when no token was resolved at construction.
    pub async fn connect(&mut self) -> Result<()> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| Error::MissingCredential(self.token_env.clone()))?;

        info!(url = ENDPOINT, "connecting to GitHub MCP server");

        let connected = self.connector.connect(ENDPOINT, token).await;
        match connected {
            Ok(service) => {
                self.service = Some(service);
                info!("connected to GitHub MCP server");
                Ok(())
            }
            Err(source) => {
                error!(url = ENDPOINT, error = %source, "failed to connect to GitHub MCP server");
                Err(Error::Connection {
                    url: ENDPOINT.to_string(),
                    source,
                })
            }
        }
    }

    /// List the tools the server exposes, in server order.
    ///
    /// Called before [`Client::connect`], this returns an empty list rather
    /// than erroring.
    pub async fn list_available_tools(&self) -> Result<Vec<Tool>> {
        let Some(service) = &self.service else {
            return Ok(Vec::new());
        };

        service
            .list_tools()
            .await
            .map_err(|source| Error::Invocation {
                operation: "tools/list".to_string(),
                source,
            })
    }

    /// Invoke the pull-request tool and return the raw result.
    ///
    /// All five fields of `pr` are forwarded verbatim; nothing in the
    /// response is interpreted at this layer.
    pub async fn create_pull_request(&self, pr: PullRequest) -> Result<CallToolResult> {
        let service = self.service.as_ref().ok_or(Error::NotConnected)?;

        info!(
            repository = %pr.repository,
            head = %pr.head,
            base = %pr.base,
            "invoking {CREATE_PULL_REQUEST_TOOL}"
        );

        service
            .call_tool(CREATE_PULL_REQUEST_TOOL, Some(pr.into_arguments()))
            .await
            .map_err(|source| Error::Invocation {
                operation: CREATE_PULL_REQUEST_TOOL.to_string(),
                source,
            })
    }

    /// Close the session and release the transport.
    ///
    /// Idempotent; safe to call when never connected. Shutdown failures are
    /// logged rather than raised, so every exit path may call this.
    pub async fn close(&mut self) {
        if let Some(service) = self.service.take() {
            info!("closing GitHub MCP session");
            if let Err(e) = service.shutdown().await {
                warn!(error = %e, "error while shutting down session");
            }
        }
    }
}
