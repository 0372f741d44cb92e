//! Path preconditions for filelist input and output.

use std::path::Path;

use crate::{Error, Result};

/// Checks that `path` names an existing filelist that is not a directory.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`] if nothing exists at `path`, or
/// [`Error::InputIsDirectory`] if it is a directory.
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(Error::InputIsDirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Checks that `path` can be used as an output file.
///
/// The path does not need to exist yet.
///
/// # Errors
///
/// Returns [`Error::OutputIsDirectory`] if `path` is an existing directory.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(Error::OutputIsDirectory(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.f");

        let err = validate_input_path(&path).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(p) if p == path));
    }

    #[test]
    fn test_input_is_directory() {
        let dir = TempDir::new().unwrap();

        let err = validate_input_path(dir.path()).unwrap_err();
        assert!(matches!(err, Error::InputIsDirectory(_)));
    }

    #[test]
    fn test_input_regular_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("design.f");
        std::fs::write(&path, "a.v\n").unwrap();

        assert!(validate_input_path(&path).is_ok());
    }

    #[test]
    fn test_output_may_not_exist() {
        let dir = TempDir::new().unwrap();
        assert!(validate_output_path(&dir.path().join("new.f")).is_ok());
    }

    #[test]
    fn test_output_is_directory() {
        let dir = TempDir::new().unwrap();

        let err = validate_output_path(dir.path()).unwrap_err();
        assert!(matches!(err, Error::OutputIsDirectory(_)));
    }
}
