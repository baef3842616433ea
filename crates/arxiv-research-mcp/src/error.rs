//! Error types for the arXiv research MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;

/// Errors from the arXiv index client layer.
#[derive(thiserror::Error, Debug)]
pub enum IndexError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the index
    #[error("arXiv returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The response body was not a parseable Atom feed
    #[error("Malformed feed: {message}")]
    Feed {
        /// What was wrong with the feed
        message: String,
    },
}

impl IndexError {
    /// Create a status error from a non-success response.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Create a malformed-feed error.
    #[must_use]
    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed { message: message.into() }
    }
}

/// Errors from the paper store write path.
///
/// Read failures are not represented here: an unreadable partition is
/// treated as empty on load and skipped on lookup.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Filesystem error while creating a partition or writing a mapping
    #[error("{}: {source}", path.display())]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Mapping could not be serialized to JSON
    #[error("Failed to serialize mapping: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Create an I/O error tagged with the path it occurred on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the arXiv index client
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// Error from the paper store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Index(IndexError::Status { status, .. }) => {
                format!("arXiv query failed with status {status}. Please try again later.")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for index client operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
