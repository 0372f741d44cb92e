//! Filelist line classification.
//!
//! Every raw line of a filelist falls into exactly one [`LineKind`]:
//!
//! | Kind | Matches | Tracked |
//! |------|---------|---------|
//! | `IncDir` | stripped line starts with `+incdir+` | incdir namespace |
//! | `File` | any other non-empty line not starting with `#` | file namespace |
//! | `Passthrough` | empty after stripping, or starts with `#` | no |
//!
//! The incdir check runs first. A commented directive (`#+incdir+...`) starts
//! with `#`, so it is a passthrough line.
//!
//! Whitespace is Unicode whitespace plus the ASCII information separators
//! `U+001C..=U+001F`.

use std::fmt;

/// Prefix that marks an include-directory directive.
pub const INCDIR_PREFIX: &str = "+incdir+";

/// Prefix of a comment line.
pub const COMMENT_PREFIX: char = '#';

/// Deduplication namespace of a tracked line.
///
/// File paths and incdir directives are counted independently, so `x.v` and
/// `+incdir+x.v` never suppress each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Plain source file entries.
    File,
    /// `+incdir+` directives.
    IncDir,
}

impl Namespace {
    /// Returns the namespace name as used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::IncDir => "incdir",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified filelist line, borrowing from the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank line or existing comment, emitted as the stripped text.
    Passthrough(&'a str),
    /// Tracked entry identified by its key.
    Entry {
        /// Namespace the key is counted in.
        namespace: Namespace,
        /// First whitespace-delimited token.
        key: &'a str,
    },
}

impl<'a> LineKind<'a> {
    /// Classifies a raw line.
    ///
    /// # Examples
    ///
    /// ```
    /// use flistclean::filelist::{LineKind, Namespace};
    ///
    /// assert_eq!(
    ///     LineKind::classify("  +incdir+./inc extra  "),
    ///     LineKind::Entry { namespace: Namespace::IncDir, key: "+incdir+./inc" }
    /// );
    /// assert_eq!(LineKind::classify("   "), LineKind::Passthrough(""));
    /// assert_eq!(LineKind::classify("# note"), LineKind::Passthrough("# note"));
    /// ```
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim_matches(is_separator);

        if line.starts_with(INCDIR_PREFIX) {
            return Self::Entry {
                namespace: Namespace::IncDir,
                key: first_token(line),
            };
        }

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return Self::Passthrough(line);
        }

        Self::Entry {
            namespace: Namespace::File,
            key: first_token(line),
        }
    }

    /// Returns the key of a tracked entry.
    #[must_use]
    pub const fn key(&self) -> Option<&'a str> {
        match self {
            Self::Entry { key, .. } => Some(*key),
            Self::Passthrough(_) => None,
        }
    }
}

/// Returns `true` if `c` separates tokens on a filelist line.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Returns the first whitespace-delimited token of `line`.
///
/// Leading whitespace is skipped; everything after the first whitespace run
/// that follows the token is ignored. An all-whitespace input yields `""`.
#[must_use]
pub fn first_token(line: &str) -> &str {
    let line = line.trim_start_matches(is_separator);
    line.find(is_separator).map_or(line, |end| &line[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_single() {
        assert_eq!(first_token("a.v"), "a.v");
    }

    #[test]
    fn test_first_token_ignores_rest() {
        assert_eq!(first_token("foo.v extra_arg  more"), "foo.v");
        assert_eq!(first_token("foo.v\tother"), "foo.v");
    }

    #[test]
    fn test_first_token_leading_whitespace() {
        assert_eq!(first_token("   bar.sv  "), "bar.sv");
    }

    #[test]
    fn test_first_token_empty() {
        assert_eq!(first_token(""), "");
        assert_eq!(first_token(" \t "), "");
    }

    #[test]
    fn test_first_token_unicode_whitespace() {
        assert_eq!(first_token("a.v\u{3000}b.v"), "a.v");
    }

    #[test]
    fn test_first_token_information_separators() {
        assert_eq!(first_token("a.v\u{1f}extra"), "a.v");
        assert_eq!(first_token("\u{1c}b.v\u{1d}"), "b.v");
    }

    #[test]
    fn test_classify_strips_information_separators() {
        assert_eq!(
            LineKind::classify("\u{1e}a.v\u{1f}extra"),
            LineKind::Entry {
                namespace: Namespace::File,
                key: "a.v",
            }
        );
        assert_eq!(LineKind::classify("\u{1c}\u{1f}"), LineKind::Passthrough(""));
    }

    #[test]
    fn test_classify_file_entry() {
        assert_eq!(
            LineKind::classify("  rtl/top.sv -v "),
            LineKind::Entry {
                namespace: Namespace::File,
                key: "rtl/top.sv",
            }
        );
    }

    #[test]
    fn test_classify_incdir_entry() {
        let kind = LineKind::classify("+incdir+${ROOT}/inc\t# trailing");
        assert_eq!(
            kind,
            LineKind::Entry {
                namespace: Namespace::IncDir,
                key: "+incdir+${ROOT}/inc",
            }
        );
        assert_eq!(kind.key(), Some("+incdir+${ROOT}/inc"));
    }

    #[test]
    fn test_classify_blank_and_whitespace() {
        assert_eq!(LineKind::classify(""), LineKind::Passthrough(""));
        assert_eq!(LineKind::classify(" \t\r"), LineKind::Passthrough(""));
    }

    #[test]
    fn test_classify_comment_is_stripped() {
        assert_eq!(
            LineKind::classify("   # keep me  "),
            LineKind::Passthrough("# keep me")
        );
    }

    #[test]
    fn test_classify_commented_incdir_is_passthrough() {
        let kind = LineKind::classify("#+incdir+./inc - ALREADY INCLUDED");
        assert!(matches!(kind, LineKind::Passthrough(_)));
        assert_eq!(kind.key(), None);
    }

    #[test]
    fn test_classify_incdir_prefix_is_case_sensitive() {
        assert_eq!(
            LineKind::classify("+INCDIR+./inc"),
            LineKind::Entry {
                namespace: Namespace::File,
                key: "+INCDIR+./inc",
            }
        );
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(Namespace::File.to_string(), "file");
        assert_eq!(Namespace::IncDir.to_string(), "incdir");
    }
}
