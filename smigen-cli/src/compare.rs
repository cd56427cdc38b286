//! Change detection between the generated and committed header.
//!
//! Exact byte-level comparison, not a semantic diff. The committed header
//! must already exist; there is no bootstrap path for first-time creation.

use std::path::Path;

use smigen_fs::{Filesystem, FsError};
use thiserror::Error;

/// Errors from header comparison.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to read {path} for comparison: {source}")]
    Read {
        path: String,
        #[source]
        source: FsError,
    },
}

/// Compare two files byte for byte.
///
/// Returns true iff the contents are identical. A missing file on either
/// side is an error; in particular a missing committed header aborts the
/// run before any publish can happen.
pub fn files_identical<F: Filesystem>(
    fs: &F,
    generated: &Path,
    committed: &Path,
) -> Result<bool, CompareError> {
    let generated_bytes = read(fs, generated)?;
    let committed_bytes = read(fs, committed)?;
    Ok(generated_bytes == committed_bytes)
}

fn read<F: Filesystem>(fs: &F, path: &Path) -> Result<Vec<u8>, CompareError> {
    fs.read_bytes(path).map_err(|e| CompareError::Read {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smigen_fs::MockFilesystem;
    use std::path::PathBuf;

    fn setup(generated: &[u8], committed: &[u8]) -> (MockFilesystem, PathBuf, PathBuf) {
        let fs = MockFilesystem::new();
        let gen_path = PathBuf::from("/tmp/work/template_smiles.h");
        let committed_path = PathBuf::from("/repo/template_smiles.h");
        fs.add_file(gen_path.clone(), generated.to_vec());
        fs.add_file(committed_path.clone(), committed.to_vec());
        (fs, gen_path, committed_path)
    }

    #[test]
    fn test_identical_files() {
        let (fs, a, b) = setup(b"same content", b"same content");
        assert!(files_identical(&fs, &a, &b).expect("compare"));
    }

    #[test]
    fn test_different_files() {
        let (fs, a, b) = setup(b"one", b"two");
        assert!(!files_identical(&fs, &a, &b).expect("compare"));
    }

    #[test]
    fn test_single_byte_difference() {
        let (fs, a, b) = setup(b"content A", b"content B");
        assert!(!files_identical(&fs, &a, &b).expect("compare"));
    }

    #[test]
    fn test_whitespace_difference_is_a_change() {
        let (fs, a, b) = setup(b"line\n", b"line \n");
        assert!(!files_identical(&fs, &a, &b).expect("compare"));
    }

    #[test]
    fn test_length_difference() {
        let (fs, a, b) = setup(b"abc", b"abcd");
        assert!(!files_identical(&fs, &a, &b).expect("compare"));
    }

    #[test]
    fn test_both_empty() {
        let (fs, a, b) = setup(b"", b"");
        assert!(files_identical(&fs, &a, &b).expect("compare"));
    }

    #[test]
    fn test_missing_committed_file() {
        let fs = MockFilesystem::new();
        let gen_path = PathBuf::from("/tmp/work/template_smiles.h");
        fs.add_file(gen_path.clone(), b"content".to_vec());

        let result = files_identical(&fs, &gen_path, &PathBuf::from("/repo/missing.h"));
        assert!(matches!(result, Err(CompareError::Read { .. })));
    }

    #[test]
    fn test_missing_generated_file() {
        let fs = MockFilesystem::new();
        let committed = PathBuf::from("/repo/template_smiles.h");
        fs.add_file(committed.clone(), b"content".to_vec());

        let result = files_identical(&fs, &PathBuf::from("/tmp/missing.h"), &committed);
        assert!(result.is_err());
    }

    #[test]
    fn test_compare_error_names_path() {
        let fs = MockFilesystem::new();
        let gen_path = PathBuf::from("/tmp/work/template_smiles.h");
        fs.add_file(gen_path.clone(), b"content".to_vec());

        let err = files_identical(&fs, &gen_path, &PathBuf::from("/repo/missing.h")).unwrap_err();
        assert!(err.to_string().contains("/repo/missing.h"));
    }
}
