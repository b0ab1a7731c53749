//! Display settings for lsr: colouring and time formatting.

use crate::core::terminal::stdout_is_tty;
use crate::core::{DEFAULT_TIME_FORMAT, is_valid_time_format};

use clap::ValueEnum;
use serde::Deserialize;

/// When to colour directory and symlink names.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode against the current stdout.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => stdout_is_tty(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    color: ColorMode,
    time_format: String,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            color: ColorMode::Auto,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Display {
    /// Replaces an unusable time format with the default one.
    pub(crate) fn validated(mut self) -> Self {
        if !is_valid_time_format(&self.time_format) {
            tracing::warn!(
                "invalid time_format '{}' in config, using '{}'",
                self.time_format,
                DEFAULT_TIME_FORMAT
            );
            self.time_format = DEFAULT_TIME_FORMAT.to_string();
        }
        self
    }

    #[inline]
    pub fn color(&self) -> ColorMode {
        self.color
    }

    #[inline]
    pub fn time_format(&self) -> &str {
        &self.time_format
    }
}
