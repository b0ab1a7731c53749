//! The `init` subcommand: write a commented default `lsr.toml`.

use crate::config::Config;
use crate::core::errors::Result;
use crate::utils::CommandSpec;

use clap::{Arg, ArgMatches, Command, value_parser};

use std::io::Write;
use std::path::PathBuf;

pub fn spec() -> CommandSpec {
    CommandSpec::new("init", definition, handle)
}

fn definition() -> Command {
    Command::new("init")
        .about("Generate a default configuration file")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Where to write the file [default: $LSR_CONFIG or ~/.config/lsr/lsr.toml]"),
        )
}

fn handle(matches: &ArgMatches, _config: &Config, out: &mut dyn Write) -> Result<()> {
    let path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(Config::default_path);
    Config::generate_default(&path)?;
    writeln!(out, "Default config generated at {}", path.display())?;
    Ok(())
}
