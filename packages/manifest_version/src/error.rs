// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for manifest version updates.

use std::io;
use std::path::{Path, PathBuf};

/// Failure while updating one of the manifest files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SyncError {
    /// The file does not exist or cannot be read.
    #[error("Failed to read {}", path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The file cannot be overwritten.
    #[error("Failed to write {}", path.display())]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The file content is not valid JSON.
    #[error("Failed to parse {}", path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The file is valid JSON, but its top level is not an object.
    #[error("Expected a JSON object at the top level of {}", path.display())]
    NotAnObject {
        /// File being parsed
        path: PathBuf,
    },

    /// The updated document cannot be serialized.
    #[error("Failed to serialize {}", path.display())]
    Serialize {
        /// File being serialized
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl SyncError {
    /// Path of the file the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Parse { path, .. }
            | Self::NotAnObject { path }
            | Self::Serialize { path, .. } => path,
        }
    }
}
