//! Memo tag removal tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::memo_types::DeleteMemoTagRequest;
use crate::mcp::responses::respond;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};

/// Tool for removing a tag token from a memo's content
#[derive(Default)]
pub struct DeleteMemoTagTool;

impl DeleteMemoTagTool {
    /// Creates a new instance of the DeleteMemoTagTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteMemoTagTool {
    fn name(&self) -> &'static str {
        "delete_memo_tag"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "memo_id": {
                    "type": "string",
                    "description": "ID of the memo, with or without the memos/ prefix"
                },
                "tag": {
                    "type": "string",
                    "description": "Tag name to remove, without the # prefix"
                }
            },
            "required": ["memo_id", "tag"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: DeleteMemoTagRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(respond(
            "delete memo tag",
            context.tool_handlers.handle_delete_tag(request).await,
        ))
    }
}
