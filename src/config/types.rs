//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::schedule::{is_valid_display_format, DEFAULT_DISPLAY_FORMAT};
use crate::error::PakstageResult;

use super::loader::{self, ConfigWarning};

/// Staging-window display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// chrono format for `scheduledDateTime`
    #[serde(default = "default_display_format")]
    pub display_format: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            display_format: default_display_format(),
        }
    }
}

impl ScheduleConfig {
    /// Configured format, or the default when it would not render
    pub fn effective_display_format(&self) -> &str {
        if is_valid_display_format(&self.display_format) {
            &self.display_format
        } else {
            DEFAULT_DISPLAY_FORMAT
        }
    }
}

fn default_display_format() -> String {
    DEFAULT_DISPLAY_FORMAT.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

fn default_true() -> bool {
    true
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PakstageResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PakstageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the working directory, the user config
    /// directory, or defaults; then apply environment overrides.
    pub fn discover(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> PakstageResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, working_dir)
    }

    /// Apply environment variable overrides (PAKSTAGE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}
