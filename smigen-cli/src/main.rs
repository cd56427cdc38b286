//! smigen CLI binary.
//!
//! Entry point for the `smigen` command-line tool.

use std::process::ExitCode;

use clap::Parser;
use smigen_cli::exit::{codes, exit_code};
use smigen_cli::logger::StdoutLogger;
use smigen_cli::{
    execute_check, execute_generate, execute_run, Cli, Command, CommandError, SignalWriter,
    Verbosity,
};
use smigen_fs::RealFilesystem;
use smigen_notation::IdentityNormalizer;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = StdoutLogger::new(Verbosity::from_count(cli.verbose));

    let result = match cli.command {
        Command::Generate(args) => run_generate(args, &logger),
        Command::Check(args) => run_check(args, &logger),
        Command::Run(args) => run_run(args, &logger),
    };

    match result {
        Ok(()) => ExitCode::from(codes::SUCCESS as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}

/// Run the generate command.
fn run_generate(args: smigen_cli::GenerateArgs, logger: &StdoutLogger) -> Result<(), CommandError> {
    let fs = RealFilesystem;
    let normalizer = IdentityNormalizer::new();

    execute_generate(&args, &fs, &normalizer, logger)?;

    Ok(())
}

/// Run the check command.
fn run_check(args: smigen_cli::CheckArgs, logger: &StdoutLogger) -> Result<(), CommandError> {
    let fs = RealFilesystem;
    let normalizer = IdentityNormalizer::new();
    let signal = SignalWriter::from_env(RealFilesystem);

    execute_check(&args, &fs, &normalizer, signal.as_ref(), logger)?;

    Ok(())
}

/// Run the run command (check then publish on change).
fn run_run(args: smigen_cli::RunArgs, logger: &StdoutLogger) -> Result<(), CommandError> {
    let fs = RealFilesystem;
    let normalizer = IdentityNormalizer::new();
    let signal = SignalWriter::from_env(RealFilesystem);

    execute_run(&args, &fs, &normalizer, signal.as_ref(), logger)?;

    Ok(())
}
