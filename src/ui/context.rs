use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use pakstage::config::{ColorMode, Config, Verbosity};
use pakstage::presentation::ColorWhen;

/// Resolved output settings for one command run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    /// Effective verbosity: the higher of `-v` count and the config level
    pub verbose: u8,
    /// Config asked for quiet output and no `-v` overrode it
    pub quiet: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        let config_level = match config.output.verbosity {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        };

        Self {
            json,
            verbose: verbose.max(config_level),
            quiet: config.output.verbosity == Verbosity::Quiet && verbose == 0,
            caps,
            color,
            unicode,
        }
    }
}
