//! Publishing the generated header over the committed one.
//!
//! Only invoked on a changed verdict; the committed header is never touched
//! when the comparison reports unchanged.

use std::path::Path;

use smigen_fs::{Filesystem, FsError};
use thiserror::Error;

/// Errors from publishing.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to publish header to {path}: {source}")]
    Copy {
        path: String,
        #[source]
        source: FsError,
    },
}

/// Copy the generated header over the committed path, replacing its
/// contents. File metadata is not preserved.
pub fn publish_header<F: Filesystem>(
    fs: &F,
    generated: &Path,
    committed: &Path,
) -> Result<(), PublishError> {
    fs.copy(generated, committed).map_err(|e| PublishError::Copy {
        path: committed.display().to_string(),
        source: e,
    })
}
