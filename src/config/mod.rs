//! Configuration management.
//!
//! Configuration is optional. Lookup order:
//!
//! 1. `--config <path>` on the command line
//! 2. `FLISTCLEAN_CONFIG_PATH` environment variable
//! 3. `<platform config dir>/flistclean/config.toml`
//! 4. `~/.config/flistclean/config.toml`
//!
//! An explicitly named file that fails to load is an error. Files found in
//! the default locations are best-effort.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a configuration file.
pub const CONFIG_PATH_ENV: &str = "FLISTCLEAN_CONFIG_PATH";

/// Main configuration for flistclean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlistConfig {
    /// Logging settings from the `[logging]` section.
    pub logging: LoggingSettings,
}

/// `[logging]` section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `flistclean=debug`.
    pub level: Option<String>,
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl FlistConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or contains unknown keys.
    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {}", path.display(), e),
            })?;

        Self::from_toml(&contents)
    }

    /// Resolves and loads configuration.
    ///
    /// `explicit` takes precedence over [`CONFIG_PATH_ENV`], which takes
    /// precedence over the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be loaded.
    pub fn load(explicit: Option<&Path>) -> crate::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let env_path = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());

        match env_path {
            Some(path) => Self::load_from_file(Path::new(&path)),
            None => Ok(Self::load_default()),
        }
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/flistclean/` on macOS)
    /// 2. XDG config dir (`~/.config/flistclean/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        Self::load_first(&default_locations(base_dirs.config_dir(), base_dirs.home_dir()))
    }

    /// Loads the first readable, valid file among `candidates`.
    fn load_first(candidates: &[PathBuf]) -> Self {
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Skipping config file");
                },
            }
        }

        Self::default()
    }

    fn from_config_file(file: ConfigFile) -> Self {
        Self {
            logging: file.logging.unwrap_or_default(),
        }
    }
}

/// Default config file locations, most specific first.
fn default_locations(config_dir: &Path, home_dir: &Path) -> [PathBuf; 2] {
    [
        config_dir.join("flistclean").join("config.toml"),
        home_dir.join(".config").join("flistclean").join("config.toml"),
    ]
}
