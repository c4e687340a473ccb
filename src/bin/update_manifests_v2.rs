use std::path::Path;

use clap::Parser;
use manifest_updater::{MicrofrontendEntry, STRUCTURED_MANIFEST_FILE, update};

/// Structured updater, v2 argument set (adds the fallback URL).
#[derive(Parser)]
#[command(name = "update-manifests-v2", version)]
#[command(about = "Insert or overwrite one record in manifests-v2.json (v2 fields)")]
struct Args {
    /// Application identifier (manifest key).
    id: String,
    /// Bundle URL.
    url: String,
    /// Application name.
    appname: String,
    /// Namespace the microfrontend is served under.
    namespace: String,
    /// Fallback URL used when the primary bundle fails to load.
    fallback: String,
    /// Server-side rendering flag; true iff this equals "true" ignoring case.
    ssr: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("update-manifests-v2: {err}");
        std::process::exit(1);
    }
}

fn run() -> manifest_updater::Result<()> {
    let args = Args::parse();
    let entry = MicrofrontendEntry::v2(
        args.url,
        args.appname,
        args.namespace,
        args.fallback,
        &args.ssr,
    );
    update::update_structured(Path::new(STRUCTURED_MANIFEST_FILE), &args.id, entry)?;
    println!("Updated {STRUCTURED_MANIFEST_FILE}: {}", args.id);
    Ok(())
}
