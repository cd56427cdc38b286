//! CLI argument parsing for smigen.
//!
//! Provides the command-line interface for the smigen binary with
//! generate, check, and run subcommands.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Default template source file.
pub const DEFAULT_TEMPLATE_FILE: &str = "templates.smi";

/// Default committed header file.
pub const DEFAULT_HEADER_FILE: &str = "template_smiles.h";

/// smigen - Generate the molecular template header from a SMILES list.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "smigen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase output verbosity (-v, -vv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render the header to an explicit output path.
    Generate(GenerateArgs),
    /// Render into a temporary location and report whether the committed
    /// header would change, without modifying it.
    Check(CheckArgs),
    /// Render, compare, and update the committed header if it changed.
    Run(RunArgs),
}

/// Arguments for the generate command.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Template source file, one CXSMILES per line.
    #[arg(short = 't', long, default_value = DEFAULT_TEMPLATE_FILE)]
    pub templates: PathBuf,

    /// Output path for the rendered header (required).
    #[arg(short = 'o', long)]
    pub output: PathBuf,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// Template source file, one CXSMILES per line.
    #[arg(short = 't', long, default_value = DEFAULT_TEMPLATE_FILE)]
    pub templates: PathBuf,

    /// Committed header to compare against.
    #[arg(long, default_value = DEFAULT_HEADER_FILE)]
    pub header: PathBuf,
}

/// Arguments for the run command (check then publish on change).
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// Template source file, one CXSMILES per line.
    #[arg(short = 't', long, default_value = DEFAULT_TEMPLATE_FILE)]
    pub templates: PathBuf,

    /// Committed header to compare against and update.
    #[arg(long, default_value = DEFAULT_HEADER_FILE)]
    pub header: PathBuf,
}

/// Parse CLI arguments from an iterator of strings.
/// Useful for testing.
pub fn parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
