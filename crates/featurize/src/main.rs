//! Handwriting Feature Pipeline - Main Entry Point
//!
//! Usage: `featurize [CONFIG_FILE]`

use featurize::{init_logging, run, FeaturizeConfig};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = FeaturizeConfig::load(config_path.as_deref())?;

    init_logging(&config.log_level, config.log_format)?;

    info!("=== Handwriting Feature Pipeline v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Reading sessions from {}", config.input_dir.display());

    let summary = run(&config).await?;
    info!("Done: {} records written", summary.records);

    Ok(())
}
