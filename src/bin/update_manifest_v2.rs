use std::path::Path;

use clap::Parser;
use manifest_updater::{MicrofrontendEntry, STRUCTURED_MANIFEST_FILE, update};

/// Structured updater, v1 argument set (no fallback field).
///
/// Overwrites the whole record for the id: if an earlier record carried a
/// fallback URL, it is gone after this runs.
#[derive(Parser)]
#[command(name = "update-manifest-v2", version)]
#[command(about = "Insert or overwrite one record in manifests-v2.json (v1 fields)")]
struct Args {
    /// Application identifier (manifest key).
    id: String,
    /// Bundle URL.
    url: String,
    /// Application name.
    appname: String,
    /// Namespace the microfrontend is served under.
    namespace: String,
    /// Server-side rendering flag; true iff this equals "true" ignoring case.
    ssr: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("update-manifest-v2: {err}");
        std::process::exit(1);
    }
}

fn run() -> manifest_updater::Result<()> {
    let args = Args::parse();
    let entry = MicrofrontendEntry::v1(args.url, args.appname, args.namespace, &args.ssr);
    update::update_structured(Path::new(STRUCTURED_MANIFEST_FILE), &args.id, entry)?;
    println!("Updated {STRUCTURED_MANIFEST_FILE}: {}", args.id);
    Ok(())
}
