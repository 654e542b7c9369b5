// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep the `version` key of `manifest.json` and `package.json` in sync.

use std::fs::{read_to_string, write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

mod error;

pub use error::SyncError;

/// Extension manifest, updated first.
pub const EXTENSION_MANIFEST: &str = "manifest.json";

/// Package manifest, updated second.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Files rewritten by [`sync_versions`], in processing order.
pub const TARGETS: [&str; 2] = [EXTENSION_MANIFEST, PACKAGE_MANIFEST];

const VERSION_KEY: &str = "version";

/// Repository root: two levels above this crate's directory.
///
/// The crate directory is taken from `CARGO_MANIFEST_DIR` at compile time, so an installed
/// binary still points at the checkout it was built from.
#[must_use]
pub fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

/// Paths of the manifest files under `root`, in processing order.
#[must_use]
pub fn targets(root: &Path) -> [PathBuf; 2] {
    TARGETS.map(|name| root.join(name))
}

/// Return `content` with the top-level `version` key set to `version`.
///
/// `serde_json` is built with the `preserve_order` feature, so an existing `version` key keeps
/// its position and every other entry keeps its order. A missing key is appended at the end.
/// With `arbitrary_precision`, numbers are written back exactly as they were read.
/// Output uses standard 2-space indentation and ends with a newline.
///
/// `path` is only used to label errors.
pub fn set_version(content: &str, version: &str, path: &Path) -> Result<String, SyncError> {
    let mut json: Value = serde_json::from_str(content).map_err(|source| SyncError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let obj = json
        .as_object_mut()
        .ok_or_else(|| SyncError::NotAnObject {
            path: path.to_path_buf(),
        })?;

    let previous = obj.insert(VERSION_KEY.to_owned(), Value::String(version.to_owned()));
    let previous = previous.as_ref().and_then(Value::as_str);
    debug!(path = %path.display(), ?previous, "replacing version");

    let mut new_content =
        serde_json::to_string_pretty(&json).map_err(|source| SyncError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    new_content.push('\n');

    Ok(new_content)
}

fn prepare(path: &Path, version: &str) -> Result<String, SyncError> {
    debug!(path = %path.display(), "reading manifest");
    let content = read_to_string(path).map_err(|source| SyncError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    set_version(&content, version, path)
}

fn overwrite(path: &Path, content: &str) -> Result<(), SyncError> {
    write(path, content).map_err(|source| SyncError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "manifest updated");
    Ok(())
}

/// Override the `version` key of a single JSON file.
pub fn sync_file(path: &Path, version: &str) -> Result<(), SyncError> {
    let content = prepare(path, version)?;
    overwrite(path, &content)
}

/// Override the `version` key of both manifests under `root`.
///
/// Both files are read and parsed before either is written, so a missing file or malformed JSON
/// leaves both untouched. Writes are not transactional: if the second write fails, the first
/// file already holds the new version.
///
/// Returns the rewritten paths in processing order.
pub fn sync_versions(root: &Path, version: &str) -> Result<Vec<PathBuf>, SyncError> {
    let pending = targets(root)
        .into_iter()
        .map(|path| prepare(&path, version).map(|content| (path, content)))
        .collect::<Result<Vec<_>, _>>()?;

    for (path, content) in &pending {
        overwrite(path, content)?;
    }

    Ok(pending.into_iter().map(|(path, _)| path).collect())
}
