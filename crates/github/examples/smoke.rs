//! Manual smoke test against the live GitHub MCP endpoint.
//!
//! Needs a real personal access token:
//!
//!   GITHUB_PAT=ghp_... cargo run --example smoke

use github::{Client, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut client = Client::new(Config::default());
    client.connect().await?;

    let tools = client.list_available_tools().await?;
    println!("Discovered {} tools via MCP protocol.", tools.len());
    for tool in &tools {
        println!("  - {}", tool.name);
        if let Some(description) = &tool.description {
            println!("    {description}");
        }
    }

    client.close().await;
    Ok(())
}
