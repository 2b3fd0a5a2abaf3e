//! Session Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning exported captures into sessions
#[derive(Debug, Error)]
pub enum SessionError {
    /// Document is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Session value is not a JSON object
    #[error("Session must be an object, got {kind}")]
    NotAnObject { kind: &'static str },

    /// Object does not follow the capture format
    #[error("Malformed session {id}: {reason}")]
    Malformed { id: String, reason: String },

    /// Export file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
