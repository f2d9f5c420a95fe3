//! MCP tool implementations organized by category

pub mod memos;
