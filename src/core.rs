//! Core listing engine for lsr.
//!
//! This module contains the pieces that do not deal with argument parsing:
//! - [fm]: directory reading (see [read_entries], [DirectoryEntry], [EntryKind]).
//! - [formatter]: text formatting for permissions, sizes, times and widths.
//! - [platform]: owner/group resolution behind the [Platform] trait.
//! - [terminal]: terminal width and tty detection.
//! - [errors]: the crate [Error] type.
//!
//! Most callers will import [read_entries], [DirectoryEntry] and [Native] from this module.

pub mod errors;
pub mod fm;
pub mod formatter;
pub mod platform;
pub mod terminal;

pub use errors::{Error, Result};
pub use fm::{DirectoryEntry, EntryKind, ReadOptions, read_entries};
pub use formatter::{
    DEFAULT_TIME_FORMAT, display_width, format_attributes, format_entry_kind, format_file_time,
    format_size, is_hidden_name, is_valid_time_format, pad_to_width, sanitize_name,
    visible_entries,
};
pub use platform::{Native, Platform, UNKNOWN};
