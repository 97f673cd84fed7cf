//! Capability traits for remote tool servers.

use rmcp::model::{CallToolResult, Tool};
use std::future::Future;

/// Error type for service operations.
///
/// Transport errors are opaque to callers; they are carried across this
/// boundary boxed and surfaced further up as error sources.
pub type ServiceError = Box<dyn std::error::Error + Send + Sync>;

/// Arguments for a remote tool call, keyed by parameter name.
pub type ToolArguments = serde_json::Map<String, serde_json::Value>;

/// A live session against a remote tool server.
///
/// This is the boundary between client logic and the wire protocol.
pub trait ToolService: Send {
    /// List the tools the server exposes, in server order.
    fn list_tools(&self) -> impl Future<Output = Result<Vec<Tool>, ServiceError>> + Send;

    /// Call a named tool with the given arguments.
    fn call_tool(
        &self,
        name: &str,
        arguments: Option<ToolArguments>,
    ) -> impl Future<Output = Result<CallToolResult, ServiceError>> + Send;

    /// Shut the session down and release the transport.
    fn shutdown(self) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

/// Opens authenticated sessions against a remote tool server.
pub trait Connector: Send + Sync {
    /// The session type this connector produces.
    type Service: ToolService;

    /// Connect to the server at `url`, presenting `token` as a bearer
    /// credential.
    fn connect(
        &self,
        url: &str,
        token: &str,
    ) -> impl Future<Output = Result<Self::Service, ServiceError>> + Send;
}
