//! Command-line parsing and dispatch for lsr.
//!
//! Subcommands are collected into a [CommandTable] that is built once at
//! startup. The table produces the root clap [Command] and routes the matched
//! subcommand to its handler; no command registers itself globally.

use crate::app;
use crate::config::Config;
use crate::core::errors::Result;

use clap::{ArgMatches, Command};

use std::io::Write;

/// Signature shared by all subcommand handlers.
pub type Handler = fn(&ArgMatches, &Config, &mut dyn Write) -> Result<()>;

/// One subcommand: its name, how to build its clap definition, and what runs it.
pub struct CommandSpec {
    name: &'static str,
    definition: fn() -> Command,
    handler: Handler,
}

impl CommandSpec {
    pub fn new(name: &'static str, definition: fn() -> Command, handler: Handler) -> Self {
        Self {
            name,
            definition,
            handler,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

pub struct CommandTable {
    commands: Vec<CommandSpec>,
}

impl CommandTable {
    /// The table of every lsr subcommand.
    pub fn new() -> Self {
        Self::with_commands(vec![
            app::list::spec(),
            app::version::spec(),
            app::init::spec(),
        ])
    }

    pub fn with_commands(commands: Vec<CommandSpec>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Root clap command with every subcommand of the table attached.
    pub fn command(&self) -> Command {
        let root = Command::new("lsr")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Rust implementation of some features of the ls command")
            .long_about(
                "lsr lists the files and folders of a directory, either as a compact grid\n\
                 or as a detailed table.\n\n\
                 For example:\n  lsr list\n  lsr list -la -p /tmp",
            )
            .subcommand_required(true)
            .arg_required_else_help(true);

        self.commands
            .iter()
            .fold(root, |root, spec| root.subcommand((spec.definition)()))
    }

    /// Runs the handler of the matched subcommand.
    pub fn dispatch(
        &self,
        matches: &ArgMatches,
        config: &Config,
        out: &mut dyn Write,
    ) -> Result<()> {
        let Some((name, sub_matches)) = matches.subcommand() else {
            return Ok(());
        };
        match self.commands.iter().find(|spec| spec.name == name) {
            Some(spec) => (spec.handler)(sub_matches, config, out),
            None => {
                tracing::warn!("no handler registered for '{}'", name);
                Ok(())
            }
        }
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_definition_is_consistent() {
        CommandTable::new().command().debug_assert();
    }

    #[test]
    fn every_spec_becomes_a_subcommand() {
        let table = CommandTable::new();
        let root = table.command();
        for spec in table.commands() {
            assert!(
                root.find_subcommand(spec.name()).is_some(),
                "missing subcommand {}",
                spec.name()
            );
        }
    }

    #[test]
    fn dispatch_routes_by_name() -> Result<()> {
        let table = CommandTable::new();
        let matches = table
            .command()
            .try_get_matches_from(["lsr", "version"])
            .map_err(crate::core::Error::from)?;
        let mut out = Vec::new();
        table.dispatch(&matches, &Config::default(), &mut out)?;
        assert!(String::from_utf8_lossy(&out).contains("Version"));
        Ok(())
    }
}
