//! The `version` subcommand.

use crate::config::Config;
use crate::core::errors::Result;
use crate::utils::CommandSpec;

use clap::{ArgMatches, Command};

use std::io::Write;

pub fn spec() -> CommandSpec {
    CommandSpec::new("version", definition, handle)
}

fn definition() -> Command {
    Command::new("version").about("Print out the version information")
}

fn handle(_matches: &ArgMatches, _config: &Config, out: &mut dyn Write) -> Result<()> {
    write_version(out)
}

/// Writes the static version, author and repository text.
pub fn write_version(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "lsr            -   Version {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Developed by   -   {}", env!("CARGO_PKG_AUTHORS"))?;
    writeln!(out, "Repository     -   {}", env!("CARGO_PKG_REPOSITORY"))?;
    writeln!(out, "Open for contribution")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_text_has_four_lines() -> Result<()> {
        let mut out = Vec::new();
        write_version(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with(env!("CARGO_PKG_VERSION")));
        assert!(lines[2].contains(env!("CARGO_PKG_REPOSITORY")));
        Ok(())
    }
}
