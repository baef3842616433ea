//! MCP tool implementations.
//!
//! Each tool parses its input parameters, runs the matching catalog
//! operation, and renders the result as the text payload of the MCP
//! response.

mod lookup;
mod search;

pub use lookup::ExtractInfoTool;
pub use search::SearchPapersTool;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::ToolResult;

/// Tool execution context.
pub struct ToolContext {
    /// Paper catalog shared by all tools.
    pub catalog: Arc<Catalog>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_papers").
    fn name(&self) -> &'static str;

    /// Tool description for the LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(SearchPapersTool), Box::new(ExtractInfoTool)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_both_tools() {
        let tools = register_all_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["search_papers", "extract_info"]);
    }

    #[test]
    fn test_schemas_are_objects_with_required_fields() {
        for tool in register_all_tools() {
            let schema = tool.input_schema();
            assert_eq!(schema["type"], "object", "{} schema is not an object", tool.name());
            assert!(schema["required"].is_array(), "{} schema lacks required list", tool.name());
            assert!(!tool.description().is_empty());
        }
    }
}
