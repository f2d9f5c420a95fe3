//! Unified error handling for the Memos MCP library
//!
//! Transport, remote, and validation failures are folded into a single typed
//! hierarchy. The MCP tool layer is the terminal boundary for every variant:
//! errors cross the protocol as text content, never as protocol faults.

use thiserror::Error;

/// The main error type for the Memos MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MemosMcpError {
    /// Network/connection failure reaching the remote Memos service
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote service responded with a non-success status or an
    /// unparseable body
    #[error("remote error ({status}): {detail}")]
    Remote {
        /// HTTP status code returned by the remote service
        status: u16,
        /// Response body or parse failure description
        detail: String,
    },

    /// The requested memo does not exist remotely
    #[error("memo not found: {0}")]
    MemoNotFound(String),

    /// Caller-supplied arguments failed a local precondition
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or missing startup configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Memos MCP operations
pub type Result<T> = std::result::Result<T, MemosMcpError>;
