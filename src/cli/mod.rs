//! CLI command implementations.
//!
//! # Example Usage
//!
//! ```bash
//! # Disable duplicates in place
//! flistclean design.f
//!
//! # Write the resolved filelist elsewhere
//! flistclean design.f --output design.resolved.f
//!
//! # Preview without writing
//! flistclean design.f --dry-run
//! ```

mod resolve;

pub use resolve::{ResolveCommand, ResolveOutcome};
