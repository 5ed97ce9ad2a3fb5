//! Customer record loading.
//!
//! # Responsibilities
//! - Read one customer record per `*.toml` / `*.json` file in a directory
//! - Deserialize into `CustomerConfig` (camelCase keys)
//!
//! # Design Decisions
//! - Files are read in filename order; that order becomes registration order
//! - Other extensions are ignored
//! - Parse failures name the offending file

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::CustomerConfig;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("cannot read records from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML record {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON record {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load every record in `dir`, ordered by filename.
pub fn load_records(dir: &Path) -> Result<Vec<CustomerConfig>, RecordError> {
    let io_err = |source| RecordError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_record_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|p| load_record(p)).collect()
}

/// Load a single record file.
pub fn load_record(path: &Path) -> Result<CustomerConfig, RecordError> {
    let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let record = match extension(path) {
        Some("json") => serde_json::from_str(&content).map_err(|source| RecordError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => toml::from_str(&content).map_err(|source| RecordError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
    };

    tracing::debug!(path = %path.display(), "Loaded customer record");
    Ok(record)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

fn is_record_file(path: &Path) -> bool {
    matches!(extension(path), Some("toml") | Some("json"))
}
