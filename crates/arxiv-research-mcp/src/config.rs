//! Configuration for the arXiv research MCP server.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv query API endpoint.
    pub const QUERY_URL: &str = "https://export.arxiv.org/api/query";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default number of search results when the caller does not say.
    pub const DEFAULT_MAX_RESULTS: i32 = 5;
}

/// Default root directory for the paper catalog, relative to the working directory.
pub const DEFAULT_PAPER_DIR: &str = "papers";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for topic partitions.
    pub paper_dir: PathBuf,

    /// arXiv query URL (overridable for testing with mock servers).
    pub query_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration rooted at the given paper directory.
    #[must_use]
    pub fn new(paper_dir: impl Into<PathBuf>) -> Self {
        Self {
            paper_dir: paper_dir.into(),
            query_url: api::QUERY_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with a custom URL for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str, paper_dir: impl Into<PathBuf>) -> Self {
        Self {
            paper_dir: paper_dir.into(),
            query_url: format!("{}/api/query", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `PAPER_DIR` for the catalog root and `ARXIV_API_URL` for the
    /// query endpoint, falling back to the defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let paper_dir = std::env::var("PAPER_DIR").unwrap_or_else(|_| DEFAULT_PAPER_DIR.into());
        let mut config = Self::new(paper_dir);
        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.query_url = url;
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PAPER_DIR)
    }
}
