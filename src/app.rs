//! Subcommand handlers for lsr.
//!
//! Each submodule exposes a `spec()` returning the [crate::utils::CommandSpec]
//! that [crate::utils::CommandTable] registers:
//! - [list]: directory listing in grid or table form.
//! - [version]: static version information.
//! - [init]: default config generation.

pub mod init;
pub mod list;
pub mod version;
