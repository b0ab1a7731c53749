//! Directory reading for lsr.
//!
//! Provides the [DirectoryEntry] struct consumed by both views and the
//! [read_entries] function that builds them from one directory read.

use crate::core::errors::{Error, Result};
use crate::core::formatter::{
    DEFAULT_TIME_FORMAT, format_attributes, format_file_time, format_size, is_hidden_name,
    sanitize_name,
};
use crate::core::platform::Platform;

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Kind of a listed entry, decided without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// One entry of a directory listing.
///
/// Every display string is computed once by [read_entries]; entries are never
/// modified afterwards.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    name: String,
    kind: EntryKind,
    permissions: String,
    modified_at: Option<SystemTime>,
    modified: String,
    hidden: bool,
    owner: String,
    group: String,
    size_bytes: u64,
    size: String,
    symlink_target: Option<PathBuf>,
}

impl DirectoryEntry {
    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    #[inline]
    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    #[inline]
    pub fn modified_at(&self) -> Option<SystemTime> {
        self.modified_at
    }

    /// Modification time already formatted for display.
    #[inline]
    pub fn modified(&self) -> &str {
        &self.modified
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[inline]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size rendered raw or human-scaled, depending on [ReadOptions].
    #[inline]
    pub fn size(&self) -> &str {
        &self.size
    }

    #[inline]
    pub fn symlink_target(&self) -> Option<&Path> {
        self.symlink_target.as_deref()
    }

    /// Name safe to print: control characters are replaced.
    #[inline]
    pub fn display_name(&self) -> Cow<'_, str> {
        sanitize_name(&self.name)
    }

    /// Name as shown in the long listing: `name -> target` for resolved links.
    pub fn long_name(&self) -> String {
        match &self.symlink_target {
            Some(target) => format!(
                "{} -> {}",
                self.display_name(),
                sanitize_name(&target.to_string_lossy())
            ),
            None => self.display_name().into_owned(),
        }
    }
}

/// Options that shape how [read_entries] renders entry fields.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    readable: bool,
    time_format: String,
}

impl ReadOptions {
    pub fn new(readable: bool, time_format: impl Into<String>) -> Self {
        Self {
            readable,
            time_format: time_format.into(),
        }
    }

    #[inline]
    pub fn readable(&self) -> bool {
        self.readable
    }

    #[inline]
    pub fn time_format(&self) -> &str {
        &self.time_format
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self::new(false, DEFAULT_TIME_FORMAT)
    }
}

/// Reads the contents of the provided directory.
///
/// Entries come back in the order the OS returned them. Entries that vanish
/// between the read and the stat are skipped. Owner, group and link target
/// failures are recovered per entry.
///
/// # Returns
/// The entries, or [Error::ReadDir] if the directory itself cannot be read.
pub fn read_entries<P>(
    path: &Path,
    opts: &ReadOptions,
    platform: &P,
) -> Result<Vec<DirectoryEntry>>
where
    P: Platform + ?Sized,
{
    let dir = fs::read_dir(path).map_err(|source| Error::ReadDir {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::with_capacity(64);

    for entry in dir {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("skipping unreadable entry in {}: {}", path.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let entry_path = entry.path();

        // symlink_metadata so links are reported as links, not their targets
        let meta = match fs::symlink_metadata(&entry_path) {
            Ok(md) => md,
            Err(e) => {
                tracing::debug!("skipping {}: {}", entry_path.display(), e);
                continue;
            }
        };

        let file_type = meta.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let symlink_target = if kind == EntryKind::Symlink {
            match fs::read_link(&entry_path) {
                Ok(target) => Some(target),
                Err(e) => {
                    tracing::debug!("cannot read link {}: {}", entry_path.display(), e);
                    None
                }
            }
        } else {
            None
        };

        let (owner, group) = platform.owner_and_group(&meta);
        let modified_at = meta.modified().ok();

        entries.push(DirectoryEntry {
            hidden: is_hidden_name(&name),
            name,
            kind,
            permissions: format_attributes(&meta),
            modified: format_file_time(modified_at, opts.time_format()),
            modified_at,
            owner,
            group,
            size_bytes: meta.len(),
            size: format_size(meta.len(), opts.readable()),
            symlink_target,
        });
    }

    Ok(entries)
}
