//! Filelist file I/O.
//!
//! - [`filelist`] reads and writes filelist text as `\n`-separated lines
//! - [`validation`] enforces the input/output path preconditions

pub mod filelist;
pub mod validation;

pub use filelist::{join_lines, normalize_newlines, read_filelist, split_lines, write_filelist};
pub use validation::{validate_input_path, validate_output_path};
