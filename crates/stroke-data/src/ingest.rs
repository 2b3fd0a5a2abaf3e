//! Session Ingestion
//!
//! Exported captures hold either a single session object or an array of
//! sessions. Each session is converted on its own so one malformed entry
//! never aborts the rest of the batch.

use crate::error::SessionError;
use crate::model::{Session, UNKNOWN};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

impl Session {
    /// Convert a decoded JSON value into a session
    pub fn from_value(value: Value) -> Result<Self, SessionError> {
        if !value.is_object() {
            return Err(SessionError::NotAnObject {
                kind: json_kind(&value),
            });
        }

        let id = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN)
            .to_string();

        serde_json::from_value(value).map_err(|e| SessionError::Malformed {
            id,
            reason: e.to_string(),
        })
    }

    /// Parse a single session from JSON text
    pub fn from_json(text: &str) -> Result<Self, SessionError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }
}

/// Parse an export document holding one session or an array of sessions.
///
/// The outer error covers the document itself (invalid JSON); the inner
/// results are per session.
pub fn parse_sessions(text: &str) -> Result<Vec<Result<Session, SessionError>>, SessionError> {
    let document: Value = serde_json::from_str(text)?;

    let sessions: Vec<_> = match document {
        Value::Array(items) => items.into_iter().map(Session::from_value).collect(),
        other => vec![Session::from_value(other)],
    };

    debug!("Parsed export document: {} sessions", sessions.len());
    Ok(sessions)
}

/// Read and parse an export file
pub fn load_file(path: &Path) -> Result<Vec<Result<Session, SessionError>>, SessionError> {
    let text = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sessions(&text)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
