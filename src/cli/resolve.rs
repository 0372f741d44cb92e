//! Resolve CLI command.

use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::Result;
use crate::filelist::{ResolveReport, resolve_lines};
use crate::io::{
    read_filelist, split_lines, validate_input_path, validate_output_path, write_filelist,
};

/// Resolve command handler.
///
/// Reads a filelist, disables duplicate entries and writes the result back
/// to the input path or to an explicit output path. The whole file is read
/// and resolved in memory before a single write.
#[derive(Debug, Clone)]
pub struct ResolveCommand {
    input: PathBuf,
    output: Option<PathBuf>,
    dry_run: bool,
}

/// Outcome of a resolve run.
#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    /// Where the filelist was written; `None` on a dry run.
    pub destination: Option<PathBuf>,
    /// Resolved lines.
    pub lines: Vec<String>,
    /// Statistics for the pass.
    pub report: ResolveReport,
}

impl ResolveCommand {
    /// Creates a command that rewrites `input` in place.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            dry_run: false,
        }
    }

    /// Writes the result to `output` instead of the input file.
    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Skips writing; the resolved lines are only returned.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the path the result is written to.
    #[must_use]
    pub fn destination(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }

    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is missing or a directory, if the output
    /// path is a directory, or if reading or writing fails. Nothing is
    /// written when an error is returned.
    #[instrument(
        skip(self),
        fields(
            operation = "resolve",
            input = %self.input.display(),
            dry_run = self.dry_run
        )
    )]
    pub fn execute(&self) -> Result<ResolveOutcome> {
        validate_input_path(&self.input)?;
        if let Some(output) = &self.output {
            validate_output_path(output)?;
        }

        let content = read_filelist(&self.input)?;
        let resolution = resolve_lines(split_lines(&content));

        if self.dry_run {
            return Ok(ResolveOutcome {
                destination: None,
                lines: resolution.lines,
                report: resolution.report,
            });
        }

        let destination = self.destination().to_path_buf();
        write_filelist(&destination, &resolution.lines)?;
        tracing::info!(
            destination = %destination.display(),
            duplicates = resolution.report.duplicate_count(),
            "Wrote resolved filelist"
        );

        Ok(ResolveOutcome {
            destination: Some(destination),
            lines: resolution.lines,
            report: resolution.report,
        })
    }
}
