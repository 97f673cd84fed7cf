//! MCP (Model Context Protocol) client plumbing.
//!
//! This crate is a thin seam over the official rmcp SDK: a pair of
//! capability traits describing what a remote tool server can do for us
//! ([`Connector`] opens a session, [`ToolService`] lists and calls tools),
//! plus the production implementation over streamable HTTP with bearer
//! authentication.
//!
//! Consumers program against the traits, which keeps them testable against
//! an in-process fake with no network dependency.
//!
//! # Example
//!
//! ```ignore
//! use mcp::{Connector, HttpConnector, ToolService};
//!
//! # async fn example() -> Result<(), mcp::ServiceError> {
//! let service = HttpConnector
//!     .connect("https://api.githubcopilot.com/mcp/", "ghp_...")
//!     .await?;
//!
//! for tool in service.list_tools().await? {
//!     println!("Tool: {}", tool.name);
//! }
//!
//! service.shutdown().await?;
//! # Ok(())
//! # }
//! ```

mod http;
mod service;

pub use http::{HttpConnector, HttpService};
pub use service::{Connector, ServiceError, ToolArguments, ToolService};

// Re-export the rmcp model types that cross this boundary.
pub use rmcp::model::{CallToolResult, Content, Tool};
