//! Harness error taxonomy.

use std::path::PathBuf;

use thiserror::Error;
use vips_compat_core::version::VersionParseError;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Version(#[from] VersionParseError),
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unknown output format {0:?} (expected `plain` or `json`)")]
    UnknownFormat(String),
}
