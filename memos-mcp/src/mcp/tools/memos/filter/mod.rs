//! Memo filter tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::memo_types::FilterMemosRequest;
use crate::mcp::responses::respond;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};

/// Tool for filtering memos with a CEL expression
#[derive(Default)]
pub struct FilterMemosTool;

impl FilterMemosTool {
    /// Creates a new instance of the FilterMemosTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for FilterMemosTool {
    fn name(&self) -> &'static str {
        "filter_memos"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "filter": {
                    "type": "string",
                    "description": "CEL filter expression, e.g. content.contains('keyword')"
                }
            },
            "required": ["filter"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: FilterMemosRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(respond(
            "filter memos",
            context.tool_handlers.handle_filter(request).await,
        ))
    }
}
