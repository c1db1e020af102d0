#![forbid(unsafe_code)]

//! `clikit.toml` parsing
//!
//! ```toml
//! [spinner]
//! interval_ms = 100
//! frames = ["⠋", "⠙", "⠹"]
//!
//! [output]
//! interactive = "auto"
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface early.

use crate::spinner::{SpinnerError, SpinnerStyle};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming a config file for [`Config::discover`]
pub const CONFIG_ENV_VAR: &str = "CLIKIT_CONFIG";

/// Spinner glyphs used when no frames are configured
pub const DEFAULT_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner period used when none is configured
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid [spinner] section: {0}")]
    Spinner(#[from] SpinnerError),
}

/// Whether output should be treated as an interactive terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interactivity {
    /// Ask the terminal
    #[default]
    Auto,
    /// Always animate, even when piped
    Always,
    /// Never animate
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinnerSettings {
    pub interval_ms: u64,
    pub frames: Vec<String>,
}

impl Default for SpinnerSettings {
    fn default() -> Self {
        SpinnerSettings {
            interval_ms: DEFAULT_INTERVAL_MS,
            frames: DEFAULT_FRAMES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl SpinnerSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub interactive: Interactivity,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub spinner: SpinnerSettings,
    pub output: OutputSettings,
}

impl Config {
    /// Parses and validates a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Loads the file named by `CLIKIT_CONFIG`, or defaults when it is unset
    pub fn discover() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => {
                log::trace!("{} not set, using default config", CONFIG_ENV_VAR);
                Ok(Config::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        SpinnerStyle::from_settings(&self.spinner)?;
        Ok(())
    }
}
