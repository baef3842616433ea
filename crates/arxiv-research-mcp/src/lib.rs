//! arXiv Research MCP Server
//!
//! A Model Context Protocol (MCP) server backed by the arXiv query API.
//! Enables LLM agents to search for papers by topic and read the stored
//! metadata back later. Every search result is persisted in a
//! topic-partitioned flat-file catalog that stays inspectable by hand.
//!
//! # Layout
//!
//! - [`client`]: arXiv query API client and Atom feed parsing
//! - [`store`]: topic-partitioned flat-file persistence
//! - [`catalog`]: the search and lookup operations behind the tools
//! - [`tools`] and [`server`]: MCP tool surface over JSON-RPC 2.0 stdio
//!
//! # Example
//!
//! ```no_run
//! use arxiv_research_mcp::{Catalog, Config, server::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let catalog = Catalog::from_config(&config)?;
//!     McpServer::new(catalog).run_stdio().await
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod store;
pub mod tools;

pub use catalog::{Catalog, LookupOutcome};
pub use client::ArxivClient;
pub use config::Config;
pub use error::{IndexError, StoreError, ToolError};
pub use store::PaperStore;
