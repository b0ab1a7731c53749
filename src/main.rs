//! main.rs
//! Entry point for lsr

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod ui;
pub(crate) mod utils;

use crate::config::Config;
use crate::core::Error;
use crate::utils::CommandTable;

use tracing_subscriber::EnvFilter;

use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let table = CommandTable::new();
    let matches = table.command().get_matches();
    let config = Config::load();

    let mut stdout = io::stdout().lock();
    match table.dispatch(&matches, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        // Output closed early, e.g. piped into `head`.
        Err(Error::Io(e)) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the listing. Filter from `LSR_LOG`, default `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("LSR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
