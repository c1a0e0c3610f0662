use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, error};
use row_diff::LineSequence;

/// Read the lines of a file, or `None` if the file does not exist
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_lines(path: &Path) -> Result<Option<LineSequence>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            error!("File {} not found", path.display());
            return Ok(None);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read file {}", path.display()))
        }
    };

    let lines = LineSequence::from_text(&String::from_utf8_lossy(&bytes));
    debug!("Read {} lines from {}", lines.len(), path.display());

    Ok(Some(lines))
}

/// Get the name shown for a file in the report: its last path component
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();

        let lines = read_lines(&dir.path().join("testFileThatDoNotExist.txt")).unwrap();

        assert!(lines.is_none());
    }

    #[test]
    fn test_reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("testToRead.txt");
        fs::write(&path, "line one\nline two\nline three\n").unwrap();

        let lines = read_lines(&path).unwrap().unwrap();

        assert_eq!(lines.as_slice(), ["line one", "line two", "line three"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9\n").unwrap();

        let lines = read_lines(&path).unwrap().unwrap();

        assert_eq!(lines.as_slice(), ["caf\u{FFFD}"]);
    }

    #[test]
    fn test_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(read_lines(dir.path()).is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("some/dir/original.txt")), "original.txt");
        assert_eq!(display_name(Path::new("plain.txt")), "plain.txt");
    }
}
