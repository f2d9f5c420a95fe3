//! Memo search tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::memo_types::SearchMemosRequest;
use crate::mcp::responses::respond;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};

/// Tool for searching memos by free text or filter expression
#[derive(Default)]
pub struct SearchMemosTool;

impl SearchMemosTool {
    /// Creates a new instance of the SearchMemosTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchMemosTool {
    fn name(&self) -> &'static str {
        "search_memos"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text search keyword"
                },
                "filter": {
                    "type": "string",
                    "description": "CEL filter expression, e.g. content.contains('keyword'). Takes precedence over query."
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchMemosRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(respond(
            "search memos",
            context.tool_handlers.handle_search(request).await,
        ))
    }
}
