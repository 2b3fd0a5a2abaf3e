//! Handwriting Feature Batch Driver
//!
//! Loads exported assessment sessions, extracts feature records on a
//! worker pool and writes them as JSON lines for the training pipeline.

pub mod config;
pub mod pipeline;

pub use config::{FeaturizeConfig, LogFormat};
pub use pipeline::{extract_all, load_sessions, run, write_records, LoadedSessions, RunSummary};

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging; `RUST_LOG` takes precedence over `level`
pub fn init_logging(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true);

    match format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish())?,
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
    }
    Ok(())
}
