//! Memo update tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::memo_types::UpdateMemoRequest;
use crate::mcp::responses::respond;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};

/// Tool for updating a memo's content or visibility
#[derive(Default)]
pub struct UpdateMemoTool;

impl UpdateMemoTool {
    /// Creates a new instance of the UpdateMemoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateMemoTool {
    fn name(&self) -> &'static str {
        "update_memo"
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
                    "description": "ID of the memo to update, e.g. G3o72r9oijTWFxy9ueWzW7"
                },
                "content": {
                    "type": "string",
                    "description": "New memo content"
                },
                "visibility": {
                    "type": "string",
                    "enum": ["PRIVATE", "PROTECTED", "PUBLIC"],
                    "description": "New visibility setting"
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
        let request: UpdateMemoRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(respond(
            "update memo",
            context.tool_handlers.handle_update(request).await,
        ))
    }
}
