//! # flistclean
//!
//! Resolves duplicate entries in HDL filelists.
//!
//! A filelist names source files and `+incdir+` directives, one per line.
//! Repeated entries are disabled in place by rewriting them as comments, so
//! the file keeps its line count and order:
//!
//! ```rust
//! use flistclean::filelist::resolve_lines;
//!
//! let resolution = resolve_lines(["+incdir+./inc", "+incdir+./inc extra", "c.v"]);
//! assert_eq!(
//!     resolution.lines,
//!     ["+incdir+./inc", "#+incdir+./inc - ALREADY INCLUDED", "c.v"]
//! );
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error as ThisError;

pub mod cli;
pub mod config;
pub mod filelist;
pub mod io;
pub mod observability;

pub use cli::{ResolveCommand, ResolveOutcome};
pub use config::FlistConfig;
pub use filelist::{Resolution, ResolveReport, resolve_lines};

/// Error type for flistclean operations.
///
/// Resolution itself never fails; every variant comes from the file,
/// configuration or logging layers around it.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InputNotFound` | The filelist path does not exist |
/// | `InputIsDirectory` | The filelist path is a directory |
/// | `OutputIsDirectory` | The `--output` path is a directory |
/// | `InvalidInput` | Malformed log format or filter directive |
/// | `OperationFailed` | I/O errors, config parse errors, logging init |
#[derive(Debug, ThisError)]
pub enum Error {
    /// The input filelist does not exist.
    #[error("filelist not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input filelist is a directory.
    #[error("filelist must be a file: {} is a directory", .0.display())]
    InputIsDirectory(PathBuf),

    /// The output path is a directory.
    #[error("output file can not be a directory: {}", .0.display())]
    OutputIsDirectory(PathBuf),

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Reading or writing a filelist fails
    /// - A configuration file cannot be read or parsed
    /// - Logging is initialized twice or its file cannot be opened
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for flistclean operations.
pub type Result<T> = std::result::Result<T, Error>;
