//! Single-pass duplicate resolution.
//!
//! Lines are processed strictly in input order: the first occurrence of a key
//! stays live and every later occurrence in the same namespace is rewritten
//! as `#<key> - ALREADY INCLUDED`. Blank lines and comments are emitted
//! stripped and never counted, which makes a second pass over the output a
//! no-op.

use std::collections::HashMap;

use tracing::instrument;

use super::line::{LineKind, Namespace};
use super::types::{DisabledEntry, Resolution, ResolveReport};

/// Suffix appended to a disabled duplicate.
pub const ALREADY_INCLUDED_MARKER: &str = " - ALREADY INCLUDED";

/// Formats the disabled form of a duplicate key.
#[must_use]
pub fn disabled_line(key: &str) -> String {
    format!("#{key}{ALREADY_INCLUDED_MARKER}")
}

/// Per-namespace occurrence counters for one resolution pass.
#[derive(Debug, Default)]
pub struct OccurrenceTracker {
    files: HashMap<String, usize>,
    incdirs: HashMap<String, usize>,
}

impl OccurrenceTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `key` and returns the updated count.
    pub fn record(&mut self, namespace: Namespace, key: &str) -> usize {
        let counts = self.counts_mut(namespace);
        if let Some(count) = counts.get_mut(key) {
            *count += 1;
            return *count;
        }
        counts.insert(key.to_string(), 1);
        1
    }

    /// Returns how many times `key` has been recorded in `namespace`.
    #[must_use]
    pub fn count(&self, namespace: Namespace, key: &str) -> usize {
        let counts = match namespace {
            Namespace::File => &self.files,
            Namespace::IncDir => &self.incdirs,
        };
        counts.get(key).copied().unwrap_or(0)
    }

    /// Returns the number of distinct keys seen in `namespace`.
    #[must_use]
    pub fn distinct(&self, namespace: Namespace) -> usize {
        match namespace {
            Namespace::File => self.files.len(),
            Namespace::IncDir => self.incdirs.len(),
        }
    }

    fn counts_mut(&mut self, namespace: Namespace) -> &mut HashMap<String, usize> {
        match namespace {
            Namespace::File => &mut self.files,
            Namespace::IncDir => &mut self.incdirs,
        }
    }
}

/// Resolves duplicates in an ordered sequence of filelist lines.
///
/// The output always has one line per input line. The algorithm is total:
/// any sequence of strings, including an empty one, resolves successfully.
///
/// # Examples
///
/// ```
/// use flistclean::filelist::resolve_lines;
///
/// let resolution = resolve_lines(["a.v", "a.v", "b.v"]);
/// assert_eq!(resolution.lines, ["a.v", "#a.v - ALREADY INCLUDED", "b.v"]);
///
/// let again = resolve_lines(&resolution.lines);
/// assert_eq!(again.lines, resolution.lines);
/// ```
#[instrument(skip_all, fields(operation = "resolve_lines"))]
pub fn resolve_lines<I, S>(lines: I) -> Resolution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tracker = OccurrenceTracker::new();
    let mut output = Vec::new();
    let mut disabled = Vec::new();

    for (index, raw) in lines.into_iter().enumerate() {
        let resolved = match LineKind::classify(raw.as_ref()) {
            LineKind::Passthrough(text) => text.to_string(),
            LineKind::Entry { namespace, key } => {
                let occurrence = tracker.record(namespace, key);
                if occurrence == 1 {
                    key.to_string()
                } else {
                    tracing::debug!(
                        line = index + 1,
                        namespace = %namespace,
                        key = %key,
                        occurrence,
                        "Disabling duplicate entry"
                    );
                    disabled.push(DisabledEntry {
                        line_number: index + 1,
                        namespace,
                        key: key.to_string(),
                        occurrence,
                    });
                    disabled_line(key)
                }
            },
        };
        output.push(resolved);
    }

    let report = ResolveReport {
        total_lines: output.len(),
        unique_files: tracker.distinct(Namespace::File),
        unique_incdirs: tracker.distinct(Namespace::IncDir),
        disabled,
    };

    tracing::info!(
        total_lines = report.total_lines,
        unique_files = report.unique_files,
        unique_incdirs = report.unique_incdirs,
        duplicates = report.duplicate_count(),
        "Resolved filelist"
    );

    Resolution {
        lines: output,
        report,
    }
}
