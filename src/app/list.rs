//! The `list` subcommand: read a directory and render it as a grid or a table.

use crate::config::{ColorMode, Config};
use crate::core::errors::Result;
use crate::core::terminal::terminal_width;
use crate::core::{Native, ReadOptions, read_entries};
use crate::ui::{GridFormatter, TableFormatter};
use crate::utils::CommandSpec;

use clap::{ArgMatches, Args, Command, FromArgMatches, ValueEnum};

use std::io::Write;
use std::path::{Path, PathBuf};

/// Columns accepted by `--sort`. Sorting is not applied yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Name,
    Permissions,
    Type,
    Size,
    Owner,
    Group,
    Modified,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// See contents of a path
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// List all files including hidden files
    #[arg(short, long)]
    pub all: bool,

    /// Show a detailed table instead of a grid
    #[arg(short, long)]
    pub long: bool,

    /// Print sizes in human readable format. Works with long lists
    #[arg(short, long)]
    pub readable: bool,

    /// Sort rows by column name. Works with long lists (not applied yet)
    #[arg(short, long, value_enum, ignore_case = true, value_name = "COLUMN")]
    pub sort: Option<SortColumn>,

    /// When to colour directory and symlink names [default: from config, else auto]
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,
}

impl ListArgs {
    /// Directory to list; an empty path means the current directory.
    pub fn dir(&self) -> &Path {
        if self.path.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.path
        }
    }
}

pub fn spec() -> CommandSpec {
    CommandSpec::new("list", definition, handle)
}

fn definition() -> Command {
    let cmd = Command::new("list")
        .about("Shows the files and folders in the current directory")
        .long_about(
            "list shows all the files and folders present in a directory.\n\
             By default it hides the files which start with '.'.\n\
             Use --all to see such hidden files.",
        );
    ListArgs::augment_args(cmd)
}

fn handle(matches: &ArgMatches, config: &Config, out: &mut dyn Write) -> Result<()> {
    let args = ListArgs::from_arg_matches(matches)?;
    let color = args.color.unwrap_or(config.display().color()).enabled();
    let long = args.long || config.general().long();
    let width = if long { 0 } else { terminal_width() };
    run(&args, config, color, width, out)
}

/// Lists `args.dir()` into `out`.
///
/// Flags are OR-ed with the config defaults. `term_width` only matters for the
/// grid view; `color` is already resolved against the output.
pub fn run(
    args: &ListArgs,
    config: &Config,
    color: bool,
    term_width: usize,
    out: &mut dyn Write,
) -> Result<()> {
    if let Some(column) = args.sort {
        tracing::warn!("sorting by {:?} is not supported yet, keeping directory order", column);
    }

    let general = config.general();
    let show_hidden = args.all || general.show_hidden();
    let long = args.long || general.long();
    let readable = args.readable || general.readable();

    let opts = ReadOptions::new(readable, config.display().time_format());
    let entries = read_entries(args.dir(), &opts, &Native)?;
    tracing::debug!("read {} entries from {}", entries.len(), args.dir().display());

    if long {
        TableFormatter::new(show_hidden, color).render(&entries, out)?;
    } else {
        GridFormatter::new(show_hidden, color, term_width).render(&entries, out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> std::result::Result<ListArgs, clap::Error> {
        let matches = definition().try_get_matches_from(argv)?;
        ListArgs::from_arg_matches(&matches)
    }

    #[test]
    fn short_flags_combine() -> std::result::Result<(), clap::Error> {
        let args = parse(&["list", "-la", "-r", "-p", "/tmp"])?;
        assert!(args.long && args.all && args.readable);
        assert_eq!(args.path, PathBuf::from("/tmp"));
        assert_eq!(args.sort, None);
        Ok(())
    }

    #[test]
    fn defaults_to_current_dir() -> std::result::Result<(), clap::Error> {
        let args = parse(&["list"])?;
        assert_eq!(args.dir(), Path::new("."));
        assert!(!args.all && !args.long && !args.readable);
        assert_eq!(args.color, None);
        Ok(())
    }

    #[test]
    fn empty_path_means_current_dir() {
        let args = ListArgs::default();
        assert_eq!(args.dir(), Path::new("."));
    }

    #[test]
    fn sort_is_case_insensitive() -> std::result::Result<(), clap::Error> {
        let args = parse(&["list", "-s", "NAME"])?;
        assert_eq!(args.sort, Some(SortColumn::Name));
        assert!(parse(&["list", "--sort", "colour"]).is_err());
        Ok(())
    }
}
