//! Reading and writing filelist text.
//!
//! [`read_filelist`] normalizes `\r\n` and lone `\r` line endings to `\n`.
//! Text is then split on `\n` only. A trailing newline therefore produces a
//! final empty line, and [`join_lines`] terminates every line, including the
//! last, with `\n`.

use std::fs;
use std::path::Path;

use tracing::instrument;

use crate::{Error, Result};

/// Splits filelist text into lines on `\n`.
///
/// # Examples
///
/// ```
/// use flistclean::io::split_lines;
///
/// assert_eq!(split_lines("a.v\nb.v\n"), ["a.v", "b.v", ""]);
/// assert_eq!(split_lines(""), [""]);
/// ```
#[must_use]
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
///
/// # Examples
///
/// ```
/// use flistclean::io::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a.v\r\nb.v\rc.v\n"), "a.v\nb.v\nc.v\n");
/// ```
#[must_use]
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Joins lines, terminating each one with `\n`.
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Reads the full text of a filelist with line endings normalized to `\n`.
///
/// # Errors
///
/// Returns [`Error::OperationFailed`] if the file cannot be read or is not
/// valid UTF-8.
#[instrument(skip_all, fields(operation = "read_filelist", path = %path.display()))]
pub fn read_filelist(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| Error::OperationFailed {
        operation: "read_filelist".to_string(),
        cause: format!("{}: {}", path.display(), e),
    })?;
    let content = if raw.contains('\r') {
        normalize_newlines(&raw)
    } else {
        raw
    };

    tracing::debug!(bytes = content.len(), "Read filelist");
    Ok(content)
}

/// Writes lines to `path`, replacing any existing content.
///
/// # Errors
///
/// Returns [`Error::OperationFailed`] if the file cannot be written.
#[instrument(skip_all, fields(operation = "write_filelist", path = %path.display()))]
pub fn write_filelist<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let content = join_lines(lines);
    fs::write(path, &content).map_err(|e| Error::OperationFailed {
        operation: "write_filelist".to_string(),
        cause: format!("{}: {}", path.display(), e),
    })?;

    tracing::debug!(bytes = content.len(), lines = lines.len(), "Wrote filelist");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a.v\n"), ["a.v", ""]);
    }

    #[test]
    fn test_split_without_trailing_newline() {
        assert_eq!(split_lines("a.v\nb.v"), ["a.v", "b.v"]);
    }

    #[test]
    fn test_split_keeps_carriage_returns() {
        assert_eq!(split_lines("a.v\r\nb.v"), ["a.v\r", "b.v"]);
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a.v\rb.v\ra.v\r"), "a.v\nb.v\na.v\n");
        assert_eq!(normalize_newlines("a.v\r\n\r\nb.v"), "a.v\n\nb.v");
        assert_eq!(normalize_newlines("a.v\n\rb.v"), "a.v\n\nb.v");
        assert_eq!(normalize_newlines("a.v\nb.v"), "a.v\nb.v");
    }

    #[test]
    fn test_read_normalizes_carriage_returns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mac.f");
        std::fs::write(&path, "a.v\rb.v\r\na.v\r").unwrap();

        let content = read_filelist(&path).unwrap();

        assert_eq!(content, "a.v\nb.v\na.v\n");
        assert_eq!(split_lines(&content), ["a.v", "b.v", "a.v", ""]);
    }

    #[test]
    fn test_join_terminates_every_line() {
        assert_eq!(join_lines(&["a.v", "b.v"]), "a.v\nb.v\n");
        assert_eq!(join_lines(&[""]), "\n");
        assert_eq!(join_lines::<&str>(&[]), "");
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.f");

        write_filelist(&path, &["a.v", "#a.v - ALREADY INCLUDED"]).unwrap();
        let content = read_filelist(&path).unwrap();

        assert_eq!(content, "a.v\n#a.v - ALREADY INCLUDED\n");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = read_filelist(&dir.path().join("missing.f")).unwrap_err();
        assert!(matches!(
            err,
            Error::OperationFailed { ref operation, .. } if operation == "read_filelist"
        ));
    }

    #[test]
    fn test_read_invalid_utf8_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.f");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(read_filelist(&path).is_err());
    }
}
