//! Tag listing tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::memo_types::ListTagsRequest;
use crate::mcp::responses::respond;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};

/// Tool for listing all tags known to the instance
#[derive(Default)]
pub struct ListTagsTool;

impl ListTagsTool {
    /// Creates a new instance of the ListTagsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListTagsTool {
    fn name(&self) -> &'static str {
        "list_tags"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListTagsRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(respond(
            "list tags",
            context.tool_handlers.handle_list_tags(request).await,
        ))
    }
}
