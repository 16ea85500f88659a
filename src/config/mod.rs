//! Configuration module for pakstage
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PAKSTAGE_*)
//! 3. `--config <FILE>`, else `./pakstage.toml`
//! 4. User config (`<config dir>/pakstage/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, ScheduleConfig, Verbosity};
