//! Handwriting Capture Data
//!
//! Session, stroke and point types for digitizer captures, and the
//! ingestion boundary that turns exported JSON into sessions.

mod error;
mod ingest;
mod model;

pub use error::SessionError;
pub use ingest::{load_file, parse_sessions};
pub use model::{CanvasSize, Point, Session, Stroke};
