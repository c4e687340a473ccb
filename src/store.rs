//! Load/store boundary for the manifest files.
//!
//! Each invocation is one read-modify-write cycle against a fixed filename in
//! the working directory. Writes go straight to the original path with a
//! truncating write: no temp file, no rename, no backup. A crash mid-write
//! can leave the file empty, and concurrent invocations race with
//! last-writer-wins.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ManifestError, Result};
use crate::schema::{FlatManifest, StructuredManifest};

/// Flat manifest filename, resolved against the working directory.
pub const FLAT_MANIFEST_FILE: &str = "manifests.json";

/// Structured manifest filename, resolved against the working directory.
pub const STRUCTURED_MANIFEST_FILE: &str = "manifests-v2.json";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    // Compact output, matching what the manifest consumers already parse.
    let json = serde_json::to_string(value).map_err(|source| ManifestError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a flat manifest. The file must already exist.
pub fn load_flat(path: &Path) -> Result<FlatManifest> {
    read_json(path)
}

/// Read and parse a structured manifest. The file must already exist.
pub fn load_structured(path: &Path) -> Result<StructuredManifest> {
    read_json(path)
}

/// Serialize and overwrite the flat manifest in place.
pub fn save_flat(path: &Path, manifest: &FlatManifest) -> Result<()> {
    write_json(path, manifest)
}

/// Serialize and overwrite the structured manifest in place.
pub fn save_structured(path: &Path, manifest: &StructuredManifest) -> Result<()> {
    write_json(path, manifest)
}
