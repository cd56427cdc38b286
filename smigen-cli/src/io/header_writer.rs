//! Writer for the rendered header artifact.
//!
//! Writes the rendered header to a destination path, fully replacing any
//! existing content. The destination's parent directory is created if it
//! does not exist yet.

use std::path::Path;

use smigen_fs::{Filesystem, FsError};
use thiserror::Error;

/// Errors from header writing.
#[derive(Debug, Error)]
pub enum HeaderWriteError {
    #[error("failed to create output directory: {0}")]
    CreateDir(#[source] FsError),

    #[error("failed to write header to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: FsError,
    },
}

/// Write the rendered header content to the given path.
pub fn write_header<F: Filesystem>(
    fs: &F,
    path: &Path,
    content: &str,
) -> Result<(), HeaderWriteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !fs.exists(parent) {
            fs.create_dir_all(parent).map_err(HeaderWriteError::CreateDir)?;
        }
    }

    fs.write_atomic(path, content.as_bytes())
        .map_err(|e| HeaderWriteError::Write {
            path: path.display().to_string(),
            source: e,
        })
}
