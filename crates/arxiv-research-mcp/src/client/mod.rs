//! arXiv query API client.
//!
//! Thin async client over the export API: one GET per search, Atom body
//! parsed by the feed module. Every search maps to exactly one request;
//! there is no retry or caching layer.

mod atom;

use reqwest::Client;

use crate::config::Config;
use crate::error::{IndexError, IndexResult};
use crate::models::IndexedPaper;

/// Client for the arXiv query API.
#[derive(Clone)]
pub struct ArxivClient {
    /// Pooled HTTP client.
    http: Client,

    /// Query endpoint URL.
    query_url: String,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .parse()
                .expect("valid user-agent header"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { http, query_url: config.query_url.clone() })
    }

    /// Search the index for papers on a topic, most relevant first.
    ///
    /// Results come back in feed order, which the API guarantees is
    /// descending relevance.
    ///
    /// # Errors
    ///
    /// Returns error on connectivity failure, a non-success status, or a
    /// malformed feed.
    pub async fn search(&self, topic: &str, max_results: i32) -> IndexResult<Vec<IndexedPaper>> {
        let params = [
            ("search_query", topic.to_string()),
            ("start", "0".to_string()),
            ("max_results", max_results.to_string()),
            ("sortBy", "relevance".to_string()),
            ("sortOrder", "descending".to_string()),
        ];

        tracing::debug!(topic, max_results, "querying index");
        let response = self.http.get(&self.query_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IndexError::status(status.as_u16(), body));
        }

        let body = response.text().await?;
        atom::parse_feed(&body)
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient").field("query_url", &self.query_url).finish()
    }
}
