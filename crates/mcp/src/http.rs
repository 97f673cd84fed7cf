//! Streamable-HTTP sessions backed by the official rmcp SDK.

use crate::service::{Connector, ServiceError, ToolArguments, ToolService};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use rmcp::{
    ServiceExt,
    model::{CallToolRequestParams, CallToolResult, Tool},
    service::RunningService,
    transport::{
        StreamableHttpClientTransport, streamable_http_client::StreamableHttpClientTransportConfig,
    },
};
use tracing::debug;

/// Connector for MCP servers speaking streamable HTTP.
///
/// The bearer token is attached as a default `Authorization` header on the
/// underlying HTTP client, so every request of the session carries it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnector;

impl Connector for HttpConnector {
    type Service = HttpService;

    async fn connect(&self, url: &str, token: &str) -> Result<HttpService, ServiceError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        debug!(url, "opening streamable HTTP transport");

        let transport = StreamableHttpClientTransport::with_client(
            http,
            StreamableHttpClientTransportConfig::with_uri(url.to_string()),
        );

        let service = ().serve(transport).await?;

        Ok(HttpService { service })
    }
}

/// A running MCP session over streamable HTTP.
pub struct HttpService {
    service: RunningService<rmcp::service::RoleClient, ()>,
}

impl ToolService for HttpService {
    async fn list_tools(&self) -> Result<Vec<Tool>, ServiceError> {
        let response = self.service.list_tools(Default::default()).await?;
        Ok(response.tools)
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Option<ToolArguments>,
    ) -> Result<CallToolResult, ServiceError> {
        let params = CallToolRequestParams {
            name: name.to_string().into(),
            arguments,
            meta: None,
            task: None,
        };

        let result = self.service.call_tool(params).await?;
        Ok(result)
    }

    async fn shutdown(self) -> Result<(), ServiceError> {
        self.service.cancel().await?;
        Ok(())
    }
}
