//! Response creation utilities for MCP operations
//!
//! All tool failures cross the protocol as error *content*, never as
//! protocol-level faults: a host always receives a successful call carrying
//! either the payload or a readable failure sentence. [`respond`] is the
//! single conversion point every tool goes through, so the contract cannot
//! drift between handlers.

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent};

use crate::error::Result;

/// Create a success response for MCP tool calls
pub fn create_success_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(false),
    }
}

/// Create an error response for MCP tool calls
pub fn create_error_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(true),
    }
}

/// Convert a handler result into the uniform tool response.
///
/// On success the payload text is returned as-is; on failure the error is
/// logged and rendered as `Failed to <operation>: <error>` in error content.
pub fn respond(operation: &str, result: Result<String>) -> CallToolResult {
    match result {
        Ok(message) => create_success_response(message),
        Err(e) => {
            tracing::error!("Failed to {operation}: {e}");
            create_error_response(format!("Failed to {operation}: {e}"))
        }
    }
}
