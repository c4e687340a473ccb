//! Manifest updaters for a micro-frontend loading pipeline.
//!
//! Two JSON manifest files live alongside the deployment tooling:
//! `manifests.json` maps an application id to its bundle URL, and
//! `manifests-v2.json` maps the same ids to structured routing records.
//! Each binary in this crate performs exactly one read-modify-write cycle
//! against one (or, for [`update::add_microfrontend`], both) of those files
//! and exits. There is no shared runtime and no state between invocations;
//! concurrent runs race with last-writer-wins.

pub mod error;
pub mod schema;
pub mod store;
pub mod update;

pub use error::{ManifestError, Result};
pub use schema::{FlatManifest, MicrofrontendEntry, StructuredManifest, ssr_flag, upsert};
pub use store::{FLAT_MANIFEST_FILE, STRUCTURED_MANIFEST_FILE};
