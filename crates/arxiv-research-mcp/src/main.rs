//! arXiv Research MCP Server - Entry Point
//!
//! Speaks JSON-RPC 2.0 over stdio for MCP hosts that spawn the server as a
//! child process.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_research_mcp::{Catalog, Config, config, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "arxiv-research-mcp")]
#[command(about = "MCP server for arXiv topic search with a local paper catalog")]
#[command(version)]
struct Cli {
    /// Directory holding the topic-partitioned paper catalog
    #[arg(long, default_value = config::DEFAULT_PAPER_DIR, env = "PAPER_DIR")]
    paper_dir: PathBuf,

    /// Override the arXiv query endpoint (for testing against a mock)
    #[arg(long, env = "ARXIV_API_URL")]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr; stdout carries the protocol stream.
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        paper_dir = %cli.paper_dir.display(),
        "Starting arXiv research MCP server"
    );

    let mut config = Config::new(cli.paper_dir);
    if let Some(url) = cli.api_url {
        config.query_url = url;
    }

    let catalog = Catalog::from_config(&config)?;
    let server = McpServer::new(catalog);

    server.run_stdio().await?;

    Ok(())
}
