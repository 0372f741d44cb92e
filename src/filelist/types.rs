//! Resolution result types.

use super::line::Namespace;

/// A duplicate entry that was disabled during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledEntry {
    /// 1-based line number in the input.
    pub line_number: usize,
    /// Namespace the key was counted in.
    pub namespace: Namespace,
    /// The duplicated key.
    pub key: String,
    /// How many times the key had been seen, this line included.
    pub occurrence: usize,
}

/// Statistics gathered over one resolution pass.
///
/// # Example
///
/// ```rust
/// use flistclean::filelist::resolve_lines;
///
/// let resolution = resolve_lines(["a.v", "a.v", "+incdir+inc", ""]);
/// let report = &resolution.report;
///
/// assert_eq!(report.total_lines, 4);
/// assert_eq!(report.unique_files, 1);
/// assert_eq!(report.unique_incdirs, 1);
/// assert_eq!(report.duplicate_count(), 1);
/// assert!(report.has_duplicates());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Number of input lines.
    pub total_lines: usize,
    /// Distinct keys in the file namespace.
    pub unique_files: usize,
    /// Distinct keys in the incdir namespace.
    pub unique_incdirs: usize,
    /// Disabled duplicates in input order.
    pub disabled: Vec<DisabledEntry>,
}

impl ResolveReport {
    /// Returns the number of disabled duplicates.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.disabled.len()
    }

    /// Returns `true` if at least one line was disabled.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.disabled.is_empty()
    }

    /// Returns a short human-readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} lines, {} files, {} include dirs, {} duplicates disabled",
            self.total_lines,
            self.unique_files,
            self.unique_incdirs,
            self.duplicate_count()
        )
    }
}

/// Output of a resolution pass: the rewritten lines plus statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Output lines, one per input line.
    pub lines: Vec<String>,
    /// Statistics for the pass.
    pub report: ResolveReport,
}
