use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Canonical error surface for manifest updates.
///
/// Every variant is fatal to the invocation that raised it; nothing is
/// recovered locally and no partial state is rolled back.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read. Manifests are never created by
    /// these tools, so a missing file surfaces here.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    /// The file contents did not parse as a single JSON object of the
    /// expected shape.
    #[error("{path} is not a valid manifest: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The updated mapping could not be serialized back to JSON.
    #[error("failed to serialize manifest for {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The filesystem rejected the write. The target file may be left
    /// truncated; no backup is kept.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}
