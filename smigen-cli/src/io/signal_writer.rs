//! Signal writer for the CI output channel.
//!
//! When the calling automation provides an output-record file through the
//! GITHUB_OUTPUT environment variable, a changed header is reported by
//! appending a single `header_changed=true` record to it. Nothing is ever
//! written on the unchanged path, so callers must treat an absent record as
//! "unchanged".

use std::path::{Path, PathBuf};

use smigen_fs::{Filesystem, FsError};
use thiserror::Error;

/// Environment variable naming the output-record file.
pub const SIGNAL_ENV_VAR: &str = "GITHUB_OUTPUT";

/// Key of the emitted record.
pub const HEADER_CHANGED_KEY: &str = "header_changed";

/// Errors from signal writing.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("failed to append signal record: {0}")]
    Append(#[source] FsError),
}

/// Writer for the append-only output-record file.
pub struct SignalWriter<F: Filesystem> {
    fs: F,
    path: PathBuf,
}

impl<F: Filesystem> SignalWriter<F> {
    /// Create a new signal writer for an explicit record file.
    pub fn new(fs: F, path: PathBuf) -> Self {
        Self { fs, path }
    }

    /// Create a signal writer from the environment, if the output channel
    /// is configured. Returns None when the variable is unset or empty.
    pub fn from_env(fs: F) -> Option<Self> {
        match std::env::var(SIGNAL_ENV_VAR) {
            Ok(value) if !value.is_empty() => Some(Self::new(fs, PathBuf::from(value))),
            _ => None,
        }
    }

    /// Get the path to the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the `header_changed=true` record.
    pub fn signal_header_changed(&self) -> Result<(), SignalError> {
        let record = format!("{}=true\n", HEADER_CHANGED_KEY);
        self.fs
            .append(&self.path, record.as_bytes())
            .map_err(SignalError::Append)
    }
}
