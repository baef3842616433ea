//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use crate::config;

/// Input for the `search_papers` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPapersInput {
    /// Topic to search the index for.
    pub topic: String,

    /// Maximum number of results to retrieve.
    #[serde(default = "default_max_results")]
    pub max_results: i32,
}

fn default_max_results() -> i32 {
    config::api::DEFAULT_MAX_RESULTS
}

/// Input for the `extract_info` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractInfoInput {
    /// Short arXiv identifier of the paper to look up.
    pub paper_id: String,
}
