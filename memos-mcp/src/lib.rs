//! # Memos MCP
//!
//! A Model Context Protocol server that exposes a [Memos](https://usememos.com)
//! note-taking instance as resources, tools, and prompt templates.
//!
//! ## Features
//!
//! - **Resources**: recent memos, all memos, and memo-by-ID, served as JSON
//! - **Tools**: search, filter, create, update, delete, and tag management
//! - **Prompts**: reusable templates guiding agents through memo workflows
//! - **Uniform failure reporting**: remote errors come back as readable text,
//!   never as protocol faults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use memos_mcp::{MemosConfig, McpServer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MemosConfig::from_env()?;
//! let server = McpServer::new(&config);
//! // Serve over stdio with rmcp::serve_server(server, stdio())
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Configuration loading and the immutable runtime configuration value
pub mod config;

/// Error types used throughout the library
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Memo domain types, remote API client, and translation policy
pub mod memos;

// Re-export core types
pub use config::MemosConfig;
pub use error::{MemosMcpError, Result};
pub use mcp::McpServer;
pub use memos::{Memo, MemosApi, MemosClient, Visibility};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
