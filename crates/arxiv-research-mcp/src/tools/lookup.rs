//! Stored-paper lookup tool: extract_info.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::models::ExtractInfoInput;

/// Stored-paper lookup tool.
///
/// Reads only from the local store. A paper is findable exactly when some
/// earlier search stored it, whatever topic that search used.
pub struct ExtractInfoTool;

#[async_trait::async_trait]
impl McpTool for ExtractInfoTool {
    fn name(&self) -> &'static str {
        "extract_info"
    }

    fn description(&self) -> &'static str {
        "Look up stored metadata for a specific paper across all topic directories. \
         Returns the saved record as JSON, or a message when nothing is stored."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": "The ID of the paper to look for"
                }
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ExtractInfoInput = serde_json::from_value(input)?;
        let outcome = ctx.catalog.lookup(&params.paper_id).await?;
        outcome.to_text()
    }
}
