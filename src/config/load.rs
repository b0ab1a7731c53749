//! The main config loading module for lsr.
//!
//! Handles locating and deserializing `lsr.toml` into [Config], and writing a
//! commented default file for `lsr init`.

use crate::config::{Display, General};
use crate::core::errors::{Error, Result};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw configuration as read from the toml file.
/// It is converted into [Config] after validation.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
}

/// Processed configuration used by the commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    general: General,
    display: Display,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display.validated(),
        }
    }
}

const DEFAULT_TOML: &str = r##"# lsr.toml - default configuration for lsr
#
# Command-line flags are applied on top of these values:
# a flag can switch an option on, but not off.

[general]
# Show entries starting with '.' (same as --all)
show_hidden = false
# Use the detailed table view (same as --long)
long = false
# Human-scaled sizes in the table view (same as --readable)
readable = false

[display]
# "auto" colours only when writing to a terminal; "always" or "never"
color = "auto"
# strftime pattern for the Modified column
time_format = "%b %-d, %Y - %-I:%M%P"
"##;

impl Config {
    /// Load configuration from the default path.
    /// A missing file gives the internal defaults; an invalid one is reported
    /// and also gives the defaults, so listing never fails on config.
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load configuration from `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str::<RawConfig>(content)
            .map(Config::from)
            .map_err(|source| Error::Config {
                path: path.to_path_buf(),
                source,
            })
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Determine the default configuration file path.
    /// Checks the LSR_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/lsr/lsr.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LSR_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lsr/lsr.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config/lsr/lsr.toml");
        }
        PathBuf::from("lsr.toml")
    }

    /// Write the default configuration file to `path`.
    /// Refuses to overwrite an existing file.
    pub fn generate_default(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(Error::ConfigExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        tracing::info!("default config generated at {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorMode;
    use crate::core::DEFAULT_TIME_FORMAT;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = Config::load_from(&dir.path().join("absent.toml"))?;
        assert_eq!(config, Config::default());
        assert!(!config.general().show_hidden());
        assert_eq!(config.display().color(), ColorMode::Auto);
        assert_eq!(config.display().time_format(), DEFAULT_TIME_FORMAT);
        Ok(())
    }

    #[test]
    fn partial_file_keeps_other_defaults() -> Result<()> {
        let config = Config::parse(
            "[general]\nlong = true\n[display]\ncolor = \"always\"\n",
            Path::new("lsr.toml"),
        )?;
        assert!(config.general().long());
        assert!(!config.general().readable());
        assert_eq!(config.display().color(), ColorMode::Always);
        assert_eq!(config.display().time_format(), DEFAULT_TIME_FORMAT);
        Ok(())
    }

    #[test]
    fn invalid_file_is_reported() {
        let result = Config::parse("[general\nlong = ", Path::new("broken.toml"));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn generated_default_round_trips() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/lsr.toml");
        Config::generate_default(&path)?;
        assert_eq!(Config::load_from(&path)?, Config::default());

        let again = Config::generate_default(&path);
        assert!(matches!(again, Err(Error::ConfigExists(_))));
        Ok(())
    }
}
