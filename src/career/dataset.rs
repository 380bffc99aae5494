use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::record::CompensationRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset {path} is not a JSON array of records: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the static compensation dataset. Individual amounts are lenient, but
/// the file itself must be a JSON array of objects.
pub fn load(path: &Path) -> Result<Vec<CompensationRecord>, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} compensation records from {}", records.len(), path.display());
    Ok(records)
}

pub fn parse(raw: &str) -> Result<Vec<CompensationRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}
