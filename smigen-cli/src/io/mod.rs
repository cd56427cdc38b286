//! File input/output for the generator pipeline.

pub mod header_writer;
pub mod signal_writer;
pub mod template_loader;

pub use header_writer::{write_header, HeaderWriteError};
pub use signal_writer::{SignalError, SignalWriter, HEADER_CHANGED_KEY, SIGNAL_ENV_VAR};
pub use template_loader::{load_templates, parse_templates, TemplateLoadError};
