//! Check command orchestration.
//!
//! Renders the header into a scoped temporary directory, compares it byte
//! for byte against the committed header, and reports the verdict through
//! the signal channel when configured. Never modifies the committed header.

use smigen_fs::Filesystem;
use smigen_notation::Normalizer;

use crate::cli::CheckArgs;
use crate::compare::files_identical;
use crate::io::SignalWriter;
use crate::logger::Logger;

use super::{stage_header, CommandResult};

/// Result of check command execution.
#[derive(Debug)]
pub struct CheckResult {
    /// Whether the generated header differs from the committed one.
    pub changed: bool,
    /// Number of template entries embedded.
    pub entry_count: usize,
}

/// Execute the check command.
pub fn execute_check<F: Filesystem>(
    args: &CheckArgs,
    fs: &F,
    normalizer: &dyn Normalizer,
    signal: Option<&SignalWriter<F>>,
    logger: &dyn Logger,
) -> CommandResult<CheckResult> {
    let staged = stage_header(fs, &args.templates, normalizer)?;
    logger.info(&format!("Successfully generated {}", staged.path.display()));

    let changed = !files_identical(fs, &staged.path, &args.header)?;

    // The record is only ever written on the changed path; absence of a
    // record means "unchanged" to callers.
    if changed {
        if let Some(signal) = signal {
            signal.signal_header_changed()?;
            logger.verbose(&format!(
                "Signal record written to {}",
                signal.path().display()
            ));
        }
    }

    logger.info(&format!(
        "Header file has {}changed",
        if changed { "" } else { "not " }
    ));

    Ok(CheckResult {
        changed,
        entry_count: staged.entry_count,
    })
}
