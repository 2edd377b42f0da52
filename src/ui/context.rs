use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use voxel_webpage::config::ColorMode;
use voxel_webpage::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    /// `--color` wins over `[output] color`; `auto` defers to the terminal.
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>, config_color: ColorMode) -> Self {
        Self::from_caps(verbose, cli_color, config_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config_color: ColorMode,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config_color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
        }
    }
}
