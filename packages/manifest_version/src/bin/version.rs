// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone binary to set the version of manifest.json and package.json.
//!
//! Usage: `version 1.0.0-beta2`

use anyhow::{Context, Result};
use clap::Parser;
use manifest_version::{repo_root, sync_versions};
use tracing_subscriber::EnvFilter;

/// Set the version key of manifest.json and package.json at the repository root.
#[derive(Debug, Parser)]
#[command(name = "version")]
struct Cli {
    /// Version string, written as is (e.g. 1.0.0-beta2)
    #[arg(value_name = "VERSION")]
    new_version: String,
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let root = repo_root();
    sync_versions(&root, &cli.new_version).context(format!(
        "failed to set version {} under {}",
        cli.new_version,
        root.display()
    ))?;

    Ok(())
}
