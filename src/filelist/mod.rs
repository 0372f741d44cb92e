//! Filelist duplicate resolution.
//!
//! A filelist lists HDL source files and `+incdir+` directives, one per line.
//! This module detects repeated entries and disables them in place:
//!
//! ```text
//! rtl/top.sv                 rtl/top.sv
//! +incdir+./inc              +incdir+./inc
//! rtl/top.sv          ==>    #rtl/top.sv - ALREADY INCLUDED
//! +incdir+./inc -y           #+incdir+./inc - ALREADY INCLUDED
//! # vendor ip                # vendor ip
//! ```
//!
//! Keys are the first whitespace-delimited token of a line. File paths and
//! include directories are tracked in separate namespaces.

mod line;
mod resolver;
mod types;

pub use line::{COMMENT_PREFIX, INCDIR_PREFIX, LineKind, Namespace, first_token, is_separator};
pub use resolver::{ALREADY_INCLUDED_MARKER, OccurrenceTracker, disabled_line, resolve_lines};
pub use types::{DisabledEntry, Resolution, ResolveReport};
