//! Dataset persistence: the JSON document that links the collector and the
//! composer.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::topics::TopicResult;

/// Topic ID → result, serialized in ID order.
pub type Dataset = BTreeMap<String, TopicResult>;

/// Creates the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Creating directory {}", dir.display()))?;
    }
    Ok(())
}

/// Writes `dataset` as pretty-printed JSON, creating parent directories.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    ensure_parent_dir(path)?;

    let json = serde_json::to_string_pretty(dataset).context("Serializing dataset")?;
    fs::write(path, json).with_context(|| format!("Writing {}", path.display()))?;

    info!(path = %path.display(), topics = dataset.len(), "Dataset saved");
    Ok(())
}

/// Reads a dataset previously written by [`write_dataset`].
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&content)
        .with_context(|| format!("Parsing dataset {}", path.display()))?;

    debug!(path = %path.display(), topics = dataset.len(), "Dataset loaded");
    Ok(dataset)
}
