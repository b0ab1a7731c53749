//! Error type shared by the listing engine, config loading and the CLI layer.
//!
//! Only failures that end the command are represented here. Per-entry lookup
//! failures (owner, group, link target) are recovered where they happen.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config file already exists at '{}'", .0.display())]
    ConfigExists(PathBuf),
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
