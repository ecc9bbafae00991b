//! Deterministic directory enumeration.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Lists the names of files in `directory` whose extension matches
/// `extension` (case-insensitive), sorted lexicographically.
///
/// Names are returned relative to `directory`. Subdirectories and files with
/// non-UTF-8 names are skipped. Identical directory contents always yield the
/// identical order.
pub fn scan_directory(directory: &Path, extension: &str) -> Result<Vec<String>, ScanError> {
    if !directory.is_dir() {
        return Err(ScanError::NotADirectory(directory.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        let matches = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            names.push(name.to_string());
        }
    }

    // NOTE: lexicographic order assumes zero-padded sequence numbers.
    names.sort();

    debug!(count = names.len(), directory = %directory.display(), "scanned directory");
    Ok(names)
}
