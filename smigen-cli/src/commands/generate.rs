//! Generate command orchestration.
//!
//! Renders the header to an explicit output path.

use std::path::PathBuf;

use smigen_fs::Filesystem;
use smigen_notation::Normalizer;

use crate::cli::GenerateArgs;
use crate::header::render_header;
use crate::io::{load_templates, write_header};
use crate::logger::Logger;

use super::{normalize_templates, CommandResult};

/// Result of generate command execution.
#[derive(Debug)]
pub struct GenerateResult {
    /// Path the header was written to.
    pub header_path: PathBuf,
    /// Number of template entries embedded.
    pub entry_count: usize,
}

/// Execute the generate command.
pub fn execute_generate<F: Filesystem>(
    args: &GenerateArgs,
    fs: &F,
    normalizer: &dyn Normalizer,
    logger: &dyn Logger,
) -> CommandResult<GenerateResult> {
    let templates = load_templates(fs, &args.templates)?;
    logger.verbose(&format!(
        "Loaded {} template entries from {}",
        templates.len(),
        args.templates.display()
    ));

    let entries = normalize_templates(&templates, normalizer)?;
    let content = render_header(&entries);
    write_header(fs, &args.output, &content)?;

    logger.info(&format!("Successfully generated {}", args.output.display()));

    Ok(GenerateResult {
        header_path: args.output.clone(),
        entry_count: entries.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{HEADER_FOOTER, HEADER_PREAMBLE};
    use crate::logger::MockLogger;
    use smigen_fs::MockFilesystem;
    use smigen_notation::IdentityNormalizer;

    fn args(templates: &str, output: &str) -> GenerateArgs {
        GenerateArgs {
            templates: PathBuf::from(templates),
            output: PathBuf::from(output),
        }
    }

    #[test]
    fn test_execute_generate() {
        let fs = MockFilesystem::new();
        fs.add_file(PathBuf::from("/in/templates.smi"), b"CC(C)O\nCCN\n".to_vec());
        let logger = MockLogger::new();

        let result = execute_generate(
            &args("/in/templates.smi", "/out/template_smiles.h"),
            &fs,
            &IdentityNormalizer::new(),
            &logger,
        )
        .expect("generate");

        assert_eq!(result.entry_count, 2);
        assert_eq!(result.header_path, PathBuf::from("/out/template_smiles.h"));

        let content = fs
            .read_to_string(&PathBuf::from("/out/template_smiles.h"))
            .expect("read");
        assert!(content.starts_with(HEADER_PREAMBLE));
        assert!(content.contains("    \"CC(C)O\",\n    \"CCN\",\n"));
        assert!(content.ends_with(HEADER_FOOTER));
    }

    #[test]
    fn test_execute_generate_empty_source_is_valid() {
        let fs = MockFilesystem::new();
        fs.add_file(PathBuf::from("/in/templates.smi"), b"\n  \n".to_vec());
        let logger = MockLogger::new();

        let result = execute_generate(
            &args("/in/templates.smi", "/out/template_smiles.h"),
            &fs,
            &IdentityNormalizer::new(),
            &logger,
        )
        .expect("generate");

        assert_eq!(result.entry_count, 0);
        let content = fs
            .read_to_string(&PathBuf::from("/out/template_smiles.h"))
            .expect("read");
        assert_eq!(content, format!("{}{}", HEADER_PREAMBLE, HEADER_FOOTER));
    }

    #[test]
    fn test_execute_generate_missing_source_fails() {
        let fs = MockFilesystem::new();
        let logger = MockLogger::new();

        let result = execute_generate(
            &args("/missing.smi", "/out/template_smiles.h"),
            &fs,
            &IdentityNormalizer::new(),
            &logger,
        );

        assert!(result.is_err());
        assert!(!fs.exists(&PathBuf::from("/out/template_smiles.h")));
    }

    #[test]
    fn test_execute_generate_logs_status() {
        let fs = MockFilesystem::new();
        fs.add_file(PathBuf::from("/in/templates.smi"), b"CCN\n".to_vec());
        let logger = MockLogger::new();

        execute_generate(
            &args("/in/templates.smi", "/out/template_smiles.h"),
            &fs,
            &IdentityNormalizer::new(),
            &logger,
        )
        .expect("generate");

        assert!(logger.contains("Successfully generated /out/template_smiles.h"));
    }
}
