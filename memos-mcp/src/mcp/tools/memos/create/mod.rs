//! Memo creation tool for MCP operations

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

use crate::mcp::memo_types::CreateMemoRequest;
use crate::mcp::responses::respond;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};

/// Tool for creating new memos
#[derive(Default)]
pub struct CreateMemoTool;

impl CreateMemoTool {
    /// Creates a new instance of the CreateMemoTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateMemoTool {
    fn name(&self) -> &'static str {
        "create_memo"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "Memo content"
                },
                "visibility": {
                    "type": "string",
                    "enum": ["PRIVATE", "PROTECTED", "PUBLIC"],
                    "description": "Visibility setting (default: PRIVATE)"
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Tags to embed in the content. When omitted, the configured default tag is applied."
                }
            },
            "required": ["content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateMemoRequest = BaseToolImpl::parse_arguments(arguments)?;
        Ok(respond(
            "create memo",
            context.tool_handlers.handle_create(request).await,
        ))
    }
}
