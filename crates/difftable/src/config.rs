//! Report settings
//!
//! Settings come from the built-in defaults, then an optional TOML file, then
//! the command line, each overriding the previous one.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use diff_report::ThemeKind;
use log::{debug, info};
use row_diff::DiffAlgorithm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

/// File looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "difftable.toml";

/// Errors that can occur when loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where to write the report
    pub output: PathBuf,

    /// Stylesheet href linked from the report
    pub stylesheet: String,

    /// Embed the stylesheet instead of linking it
    pub inline_style: bool,

    /// Write the default stylesheet next to the report
    pub write_stylesheet: bool,

    /// Show the plain content of both files
    pub show_originals: bool,

    pub theme: ThemeKind,

    pub algorithm: DiffAlgorithm,

    /// Diff timeout in milliseconds, none for no limit
    pub timeout_ms: Option<u64>,

    /// Run both comparison directions in parallel
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("test-result.html"),
            stylesheet: "style.css".to_string(),
            inline_style: false,
            write_stylesheet: false,
            show_originals: true,
            theme: ThemeKind::default(),
            algorithm: DiffAlgorithm::default(),
            timeout_ms: None,
            parallel: true,
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file at `path`, or the default file if it exists
    ///
    /// Without an explicit path and without a default file, the built-in
    /// defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.exists() {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default_path
            }
        };

        info!("Loading config from {}", path.display());
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        Self::from_toml(&path, &text)
    }

    /// Override settings with the ones given on the command line
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if let Some(stylesheet) = &cli.stylesheet {
            self.stylesheet = stylesheet.clone();
        }
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if let Some(algorithm) = cli.algorithm {
            self.algorithm = algorithm;
        }
        if cli.timeout_ms.is_some() {
            self.timeout_ms = cli.timeout_ms;
        }
        self.inline_style |= cli.inline_style;
        self.write_stylesheet |= cli.write_stylesheet;
        self.show_originals &= !cli.no_originals;
        self.parallel &= !cli.sequential;
    }

    /// Get the diff timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
