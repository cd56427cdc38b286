//! smigen CLI.
//!
//! Command-line tool that renders the molecular template header from a
//! newline-delimited CXSMILES list, detects whether the committed header
//! would change, and publishes the new header and a CI signal record when
//! it does.

pub mod cli;
pub mod commands;
pub mod compare;
pub mod exit;
pub mod header;
pub mod io;
pub mod logger;
pub mod publish;

pub use cli::{
    parse_from, CheckArgs, Cli, Command, GenerateArgs, RunArgs, DEFAULT_HEADER_FILE,
    DEFAULT_TEMPLATE_FILE,
};
pub use commands::{
    execute_check, execute_generate, execute_run, CheckResult, CommandError, CommandResult,
    GenerateResult, RunResult,
};
pub use compare::{files_identical, CompareError};
pub use header::{entry_line, render_header, HEADER_FOOTER, HEADER_PREAMBLE};
pub use io::{
    load_templates, write_header, HeaderWriteError, SignalError, SignalWriter, TemplateLoadError,
    HEADER_CHANGED_KEY, SIGNAL_ENV_VAR,
};
pub use logger::{Logger, MockLogger, NullLogger, StdoutLogger, Verbosity};
pub use publish::{publish_header, PublishError};
