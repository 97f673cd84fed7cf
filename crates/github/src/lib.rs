//! GitHub MCP client.
//!
//! Connects to GitHub's hosted MCP endpoint over streamable HTTP,
//! authenticating with a personal access token, and exposes the small
//! surface an agent backend needs: list the remote tools and invoke the
//! pull-request tool. Everything protocol-shaped is delegated to the
//! transport layer in the `mcp` crate.
//!
//! # Example
//!
//! ```ignore
//! use github::{Client, Config, PullRequest};
//!
//! # async fn example() -> github::Result<()> {
//! let mut client = Client::new(Config::default());
//! client.connect().await?;
//!
//! let tools = client.list_available_tools().await?;
//! println!("{} tools available", tools.len());
//!
//! let pr = PullRequest::new("owner/repo", "feat: wire up MCP", "…", "feature-x");
//! let result = client.create_pull_request(pr).await?;
//! println!("{result:?}");
//!
//! client.close().await;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod pull_request;

pub use client::{Client, ENDPOINT};
pub use config::{Config, ConfigError, DEFAULT_TOKEN_ENV};
pub use error::{Error, Result};
pub use pull_request::{DEFAULT_BASE, PullRequest};
