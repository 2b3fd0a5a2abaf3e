//! Load, extract, write

use anyhow::Context;
use feature_engine::{FeatureAggregator, FeatureConfig, FeatureRecord};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use stroke_data::Session;
use tracing::{debug, error, info, warn};

use crate::config::FeaturizeConfig;

/// Sessions read from an input directory
#[derive(Debug, Default)]
pub struct LoadedSessions {
    pub sessions: Vec<Session>,
    /// Files that could not be read or parsed
    pub failed_files: usize,
    /// Malformed sessions inside otherwise readable files
    pub skipped_sessions: usize,
}

/// Outcome of a full run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub failed_files: usize,
    pub skipped_sessions: usize,
    pub output_file: PathBuf,
}

/// Paths of readable directory entries; failed entries are logged and dropped
fn readable_entries<I>(dir: &Path, entries: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .collect()
}

/// `*.json` files in a directory, sorted by name
fn session_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()));

    let mut files: Vec<PathBuf> = readable_entries(dir, entries)
        .into_iter()
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Read every export file in `dir`.
///
/// Unreadable files and malformed sessions are logged and skipped.
pub fn load_sessions(dir: &Path) -> anyhow::Result<LoadedSessions> {
    let files = session_files(dir)?;
    info!("Found {} JSON files in {}", files.len(), dir.display());

    let mut loaded = LoadedSessions::default();
    for path in files {
        let parsed = match stroke_data::load_file(&path) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("Failed to load {}: {}", path.display(), e);
                loaded.failed_files += 1;
                continue;
            }
        };

        for result in parsed {
            match result {
                Ok(session) => loaded.sessions.push(session),
                Err(e) => {
                    warn!("Skipping session in {}: {}", path.display(), e);
                    loaded.skipped_sessions += 1;
                }
            }
        }
        debug!("Loaded {}", path.display());
    }

    info!("Total sessions loaded: {}", loaded.sessions.len());
    Ok(loaded)
}

/// Extract records on the blocking pool, at most `workers` chunks at once.
/// Output order matches input order.
pub async fn extract_all(
    sessions: Vec<Session>,
    config: FeatureConfig,
    workers: usize,
) -> anyhow::Result<Vec<FeatureRecord>> {
    let aggregator = FeatureAggregator::new(config);
    let total = sessions.len();
    let chunk_size = total.div_ceil(workers.max(1)).max(1);

    let mut handles = Vec::new();
    let mut remaining = sessions;
    while !remaining.is_empty() {
        let rest = remaining.split_off(chunk_size.min(remaining.len()));
        let chunk = std::mem::replace(&mut remaining, rest);
        handles.push(tokio::task::spawn_blocking(move || {
            aggregator.extract_batch(&chunk)
        }));
    }

    let mut records = Vec::with_capacity(total);
    for handle in handles {
        records.extend(handle.await.context("Extraction worker panicked")?);
    }
    Ok(records)
}

/// Write one JSON object per line, creating parent directories
pub fn write_records(path: &Path, records: &[FeatureRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let file = fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Run the whole pipeline for a configuration
pub async fn run(config: &FeaturizeConfig) -> anyhow::Result<RunSummary> {
    let loaded = load_sessions(&config.input_dir)?;
    let records = extract_all(loaded.sessions, config.features, config.worker_count()).await?;
    write_records(&config.output_file, &records)?;

    info!(
        "Saved {} feature records ({} columns) to {}",
        records.len(),
        feature_engine::FEATURE_DIMENSION,
        config.output_file.display()
    );
    if loaded.failed_files > 0 || loaded.skipped_sessions > 0 {
        warn!(
            "Skipped {} unreadable files and {} malformed sessions",
            loaded.failed_files, loaded.skipped_sessions
        );
    }

    Ok(RunSummary {
        records: records.len(),
        failed_files: loaded.failed_files,
        skipped_sessions: loaded.skipped_sessions,
        output_file: config.output_file.clone(),
    })
}
