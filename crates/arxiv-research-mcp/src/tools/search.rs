//! Topic search tool: search_papers.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::config::api;
use crate::error::ToolResult;
use crate::models::SearchPapersInput;

/// Topic search tool.
///
/// Queries the index and persists every result into the topic's partition,
/// so later lookups can answer without going back to the network.
pub struct SearchPapersTool;

#[async_trait::async_trait]
impl McpTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "Search arXiv for papers about a topic and store their metadata locally. \
         Returns the list of paper IDs found, most relevant first."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The topic to search for"
                },
                "max_results": {
                    "type": "integer",
                    "default": api::DEFAULT_MAX_RESULTS,
                    "description": "Maximum number of results to retrieve"
                }
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchPapersInput = serde_json::from_value(input)?;
        let paper_ids = ctx.catalog.search(&params.topic, params.max_results).await?;
        Ok(serde_json::to_string(&paper_ids)?)
    }
}
