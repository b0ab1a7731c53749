//! Command-line plumbing for lsr.
//!
//! The [cli] submodule holds the [cli::CommandTable] that builds the clap
//! command tree and dispatches subcommands to their handlers in [crate::app].

pub mod cli;

pub use cli::{CommandSpec, CommandTable, Handler};
