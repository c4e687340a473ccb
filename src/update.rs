//! One-shot update operations behind the four command-line entry points.

use std::path::Path;

use crate::error::Result;
use crate::schema::{MicrofrontendEntry, upsert};
use crate::store;

/// Upsert `manifest[id] = value` in the flat manifest at `path`.
pub fn update_flat(path: &Path, id: &str, value: &str) -> Result<()> {
    let mut manifest = store::load_flat(path)?;
    upsert(&mut manifest, id, value.to_string());
    store::save_flat(path, &manifest)
}

/// Upsert `manifest[id] = entry` in the structured manifest at `path`.
pub fn update_structured(path: &Path, id: &str, entry: MicrofrontendEntry) -> Result<()> {
    let mut manifest = store::load_structured(path)?;
    upsert(&mut manifest, id, entry);
    store::save_structured(path, &manifest)
}

/// Add a microfrontend by URL to both schema versions in one invocation.
///
/// The flat manifest gets `id -> url`; the structured manifest gets a
/// placeholder record for the same id. The writes are independent: if the
/// structured side fails after the flat write committed, the two files are
/// left inconsistent and the error propagates with no rollback.
pub fn add_microfrontend(
    flat_path: &Path,
    structured_path: &Path,
    id: &str,
    url: &str,
) -> Result<()> {
    update_flat(flat_path, id, url)?;
    update_structured(structured_path, id, MicrofrontendEntry::placeholder(url))
}
