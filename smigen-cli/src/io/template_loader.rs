//! Template source file loader.
//!
//! Reads the newline-delimited template list (templates.smi):
//! - One CXSMILES string per line
//! - Surrounding whitespace is trimmed
//! - Lines that are empty after trimming are skipped
//! - There is no comment syntax; every non-blank line is an entry

use std::path::Path;

use smigen_fs::{Filesystem, FsError};
use thiserror::Error;

/// Errors from template loading.
#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("failed to read template file: {0}")]
    Read(#[from] FsError),
}

/// Load template entries from a file.
pub fn load_templates<F: Filesystem>(
    fs: &F,
    path: &Path,
) -> Result<Vec<String>, TemplateLoadError> {
    let content = fs.read_to_string(path)?;
    Ok(parse_templates(&content))
}

/// Parse template content from a string.
///
/// This is the core parsing logic, separated for testability. Order is
/// preserved and no deduplication is performed.
pub fn parse_templates(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
