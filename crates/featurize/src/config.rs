//! Driver configuration

use config::{Config, ConfigError, Environment, File};
use feature_engine::FeatureConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "featurize";

/// Prefix for environment overrides, e.g. `FEATURIZE__WORKERS=8`
pub const ENV_PREFIX: &str = "FEATURIZE";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Complete driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturizeConfig {
    /// Directory of exported session files (`*.json`)
    pub input_dir: PathBuf,
    /// Destination for feature records, one JSON object per line
    pub output_file: PathBuf,
    /// Blocking worker count for extraction
    pub workers: usize,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
    /// Extraction settings
    pub features: FeatureConfig,
}

impl Default for FeaturizeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data/raw"),
            output_file: PathBuf::from("data/processed/features.jsonl"),
            workers: 4,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            features: FeatureConfig::default(),
        }
    }
}

impl FeaturizeConfig {
    /// Layer defaults, `featurize.{toml,yaml,json}` if present, an explicit
    /// file if given, then `FEATURIZE__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Worker count, at least one
    pub fn worker_count(&self) -> usize {
        self.workers.max(1)
    }
}
