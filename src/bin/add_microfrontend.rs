use std::path::Path;

use clap::Parser;
use manifest_updater::{FLAT_MANIFEST_FILE, STRUCTURED_MANIFEST_FILE, update};

/// Dual updater: adds a microfrontend by URL to both schema versions.
///
/// The structured record is written with empty placeholder fields and must be
/// completed later via update-manifests-v2.
#[derive(Parser)]
#[command(name = "add-microfrontend", version)]
#[command(about = "Add a microfrontend URL to manifests.json and manifests-v2.json")]
struct Args {
    /// Application identifier (manifest key).
    id: String,
    /// Bundle URL.
    url: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("add-microfrontend: {err}");
        std::process::exit(1);
    }
}

fn run() -> manifest_updater::Result<()> {
    let args = Args::parse();
    update::add_microfrontend(
        Path::new(FLAT_MANIFEST_FILE),
        Path::new(STRUCTURED_MANIFEST_FILE),
        &args.id,
        &args.url,
    )?;
    println!("Updated {FLAT_MANIFEST_FILE} and {STRUCTURED_MANIFEST_FILE}: {}", args.id);
    Ok(())
}
