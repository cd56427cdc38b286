//! Run command orchestration.
//!
//! The full pipeline: render the header into a scoped temporary directory,
//! compare against the committed header, and on a difference copy the new
//! header over the committed one and report through the signal channel.

use std::path::PathBuf;

use smigen_fs::Filesystem;
use smigen_notation::Normalizer;

use crate::cli::RunArgs;
use crate::compare::files_identical;
use crate::io::SignalWriter;
use crate::logger::Logger;
use crate::publish::publish_header;

use super::{stage_header, CommandResult};

/// Result of run command execution.
#[derive(Debug)]
pub struct RunResult {
    /// Whether the committed header was updated.
    pub changed: bool,
    /// Number of template entries embedded.
    pub entry_count: usize,
    /// Path of the committed header.
    pub header_path: PathBuf,
}

/// Execute the run command.
pub fn execute_run<F: Filesystem>(
    args: &RunArgs,
    fs: &F,
    normalizer: &dyn Normalizer,
    signal: Option<&SignalWriter<F>>,
    logger: &dyn Logger,
) -> CommandResult<RunResult> {
    let staged = stage_header(fs, &args.templates, normalizer)?;
    logger.info(&format!("Successfully generated {}", staged.path.display()));

    let changed = !files_identical(fs, &staged.path, &args.header)?;
    logger.info(&format!(
        "Header file has {}changed",
        if changed { "" } else { "not " }
    ));

    if changed {
        publish_header(fs, &staged.path, &args.header)?;
        logger.info(&format!(
            "Updated {} with the generated header",
            args.header.display()
        ));

        if let Some(signal) = signal {
            signal.signal_header_changed()?;
            logger.verbose(&format!(
                "Signal record written to {}",
                signal.path().display()
            ));
        }
    }

    Ok(RunResult {
        changed,
        entry_count: staged.entry_count,
        header_path: args.header.clone(),
    })
}
