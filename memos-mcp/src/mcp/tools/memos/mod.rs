//! Memo management tools for MCP operations
//!
//! This module provides all memo-related tools using the tool registry
//! pattern. Each tool is in its own submodule with a dedicated implementation
//! and description.
//!
//! ## Tool Categories
//!
//! ### Discovery
//! - **search**: free-text or CEL-filtered memo search
//! - **filter**: CEL filter expressions only
//! - **list_tags**: every tag known to the instance
//!
//! ### Mutation
//! - **create**: new memos, with tag embedding and default tagging
//! - **update**: partial content/visibility updates
//! - **delete**: remove a memo permanently
//! - **delete_tag**: strip a tag token from a memo's content
//!
//! All tools follow consistent patterns: request types defined in
//! `crate::mcp::memo_types`, business logic in `crate::mcp::tool_handlers`,
//! failures reported as error content rather than protocol faults.

pub mod create;
pub mod delete;
pub mod delete_tag;
pub mod filter;
pub mod list_tags;
pub mod search;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all memo-related tools with the registry
pub fn register_memo_tools(registry: &mut ToolRegistry) {
    registry.register(search::SearchMemosTool::new());
    registry.register(filter::FilterMemosTool::new());
    registry.register(create::CreateMemoTool::new());
    registry.register(update::UpdateMemoTool::new());
    registry.register(delete::DeleteMemoTool::new());
    registry.register(delete_tag::DeleteMemoTagTool::new());
    registry.register(list_tags::ListTagsTool::new());
}
