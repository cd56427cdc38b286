//! Exit codes for the smigen CLI.
//!
//! Following Unix conventions for exit codes.

use crate::commands::CommandError;

/// Exit code constants.
pub mod codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Invalid arguments.
    pub const INVALID_ARGS: i32 = 1;
    /// IO error.
    pub const IO_ERROR: i32 = 2;
    /// Template source error.
    pub const TEMPLATE_ERROR: i32 = 3;
    /// Malformed notation in a template entry.
    pub const NOTATION_ERROR: i32 = 4;
    /// Header comparison error.
    pub const COMPARE_ERROR: i32 = 5;
    /// Signal channel error.
    pub const SIGNAL_ERROR: i32 = 6;
    /// Header publish error.
    pub const PUBLISH_ERROR: i32 = 7;
}

/// Map a CommandError to an exit code.
pub fn exit_code(error: &CommandError) -> i32 {
    match error {
        CommandError::Template(_) => codes::TEMPLATE_ERROR,
        CommandError::Notation { .. } => codes::NOTATION_ERROR,
        CommandError::Filesystem(_) => codes::IO_ERROR,
        CommandError::HeaderWrite(_) => codes::IO_ERROR,
        CommandError::Compare(_) => codes::COMPARE_ERROR,
        CommandError::Signal(_) => codes::SIGNAL_ERROR,
        CommandError::Publish(_) => codes::PUBLISH_ERROR,
    }
}
