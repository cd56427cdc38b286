//! Command orchestration for CLI subcommands.
//!
//! Provides execute functions for:
//! - `generate` - Render the header to an explicit output path
//! - `check` - Render into a temp location and compare against the committed header
//! - `run` - Check, then publish the new header if it changed

pub mod check;
pub mod generate;
pub mod run;

pub use check::{execute_check, CheckResult};
pub use generate::{execute_generate, GenerateResult};
pub use run::{execute_run, RunResult};

use std::path::{Path, PathBuf};

use smigen_fs::{Filesystem, FsError};
use smigen_notation::{Normalizer, NotationError};
use tempfile::TempDir;
use thiserror::Error;

use crate::cli::DEFAULT_HEADER_FILE;
use crate::compare::CompareError;
use crate::header::render_header;
use crate::io::{load_templates, write_header, HeaderWriteError, SignalError, TemplateLoadError};
use crate::publish::PublishError;

/// Errors from command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("template error: {0}")]
    Template(#[from] TemplateLoadError),

    #[error("invalid notation in template entry {index}: {source}")]
    Notation {
        index: usize,
        #[source]
        source: NotationError,
    },

    #[error("filesystem error: {0}")]
    Filesystem(#[from] FsError),

    #[error("header write error: {0}")]
    HeaderWrite(#[from] HeaderWriteError),

    #[error("compare error: {0}")]
    Compare(#[from] CompareError),

    #[error("signal error: {0}")]
    Signal(#[from] SignalError),

    #[error("publish error: {0}")]
    Publish(#[from] PublishError),
}

/// Result of command execution.
pub type CommandResult<T> = Result<T, CommandError>;

/// Run every template entry through the normalizer.
///
/// A single malformed entry aborts the whole run; there is no skip-and-
/// continue policy.
pub(crate) fn normalize_templates(
    templates: &[String],
    normalizer: &dyn Normalizer,
) -> CommandResult<Vec<String>> {
    templates
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            normalizer
                .normalize(entry)
                .map_err(|source| CommandError::Notation { index, source })
        })
        .collect()
}

/// A header rendered into a scoped temporary directory.
///
/// The directory and its contents are removed when this value is dropped,
/// on every exit path.
pub(crate) struct StagedHeader {
    _dir: TempDir,
    pub path: PathBuf,
    pub entry_count: usize,
}

/// Load, normalize, and render the templates into a fresh temporary
/// directory. Shared by check and run.
pub(crate) fn stage_header<F: Filesystem>(
    fs: &F,
    templates_path: &Path,
    normalizer: &dyn Normalizer,
) -> CommandResult<StagedHeader> {
    let templates = load_templates(fs, templates_path)?;
    let entries = normalize_templates(&templates, normalizer)?;
    let content = render_header(&entries);

    let dir = tempfile::tempdir().map_err(FsError::Io)?;
    let path = dir.path().join(DEFAULT_HEADER_FILE);
    write_header(fs, &path, &content)?;

    Ok(StagedHeader {
        _dir: dir,
        path,
        entry_count: entries.len(),
    })
}
