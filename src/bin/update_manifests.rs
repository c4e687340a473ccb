use std::path::Path;

use clap::Parser;
use manifest_updater::{FLAT_MANIFEST_FILE, update};

/// Flat updater: `manifests.json[id] = value`.
#[derive(Parser)]
#[command(name = "update-manifests", version)]
#[command(about = "Insert or overwrite one entry in manifests.json")]
struct Args {
    /// Application identifier (manifest key).
    id: String,
    /// Value stored verbatim under the identifier, normally a bundle URL.
    value: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("update-manifests: {err}");
        std::process::exit(1);
    }
}

fn run() -> manifest_updater::Result<()> {
    let args = Args::parse();
    update::update_flat(Path::new(FLAT_MANIFEST_FILE), &args.id, &args.value)?;
    println!("Updated {FLAT_MANIFEST_FILE}: {}", args.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn missing_value_argument_is_a_usage_error() {
        assert!(Args::try_parse_from(["update-manifests", "id"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }
}
