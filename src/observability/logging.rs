//! Structured logging configuration.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::{Error, Result};

/// Environment variable holding a log filter directive.
pub const LOG_FILTER_ENV: &str = "FLISTCLEAN_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";
const VERBOSE_LOG_LEVEL: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for anything other than `pretty` or `json`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidInput(format!(
                "unknown log format '{other}' (expected 'pretty' or 'json')"
            ))),
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Filter directive the filter was built from.
    pub directive: String,
    /// Event filter.
    pub filter: EnvFilter,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; stderr when `None`.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds logging configuration from config settings with env overrides.
    ///
    /// Filter precedence: `verbose`, then [`LOG_FILTER_ENV`], then the
    /// configured level, then `warn`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the format or filter directive is
    /// malformed.
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Result<Self> {
        let env_filter = std::env::var(LOG_FILTER_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());
        Self::resolve(settings, verbose, env_filter.as_deref())
    }

    fn resolve(
        settings: Option<&LoggingSettings>,
        verbose: bool,
        env_filter: Option<&str>,
    ) -> Result<Self> {
        let directive = if verbose {
            VERBOSE_LOG_LEVEL
        } else {
            env_filter
                .or_else(|| settings.and_then(|cfg| cfg.level.as_deref()))
                .unwrap_or(DEFAULT_LOG_LEVEL)
        };

        let filter = EnvFilter::try_new(directive).map_err(|e| {
            Error::InvalidInput(format!("invalid log filter '{directive}': {e}"))
        })?;

        let format = settings
            .and_then(|cfg| cfg.format.as_deref())
            .map(LogFormat::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            directive: directive.to_string(),
            filter,
            format,
            file: settings.and_then(|cfg| cfg.file.clone()),
        })
    }
}
