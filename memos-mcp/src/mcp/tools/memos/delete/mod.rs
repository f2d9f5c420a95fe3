//! Memo deletion tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::memo_types::DeleteMemoRequest;
use crate::mcp::responses::respond;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};

/// Tool for deleting a memo
#[derive(Default)]
pub struct DeleteMemoTool;

impl DeleteMemoTool {
    /// Creates a new instance of the DeleteMemoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteMemoTool {
    fn name(&self) -> &'static str {
        "delete_memo"
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
                    "description": "ID of the memo to delete, with or without the memos/ prefix"
                }
            },
            "required": ["memo_id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: DeleteMemoRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(respond(
            "delete memo",
            context.tool_handlers.handle_delete(request).await,
        ))
    }
}
