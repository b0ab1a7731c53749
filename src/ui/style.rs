//! Colouring of entry names.

use crate::core::EntryKind;

use crossterm::style::{Color, Stylize};

/// Wraps `text` in the colour for `kind` when colour is enabled.
/// Directories are bold blue, symlinks bold green, files unadorned.
pub fn paint(text: &str, kind: EntryKind, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match kind {
        EntryKind::Directory => text.with(Color::Blue).bold().to_string(),
        EntryKind::Symlink => text.with(Color::Green).bold().to_string(),
        EntryKind::File => text.to_string(),
    }
}

/// Bold text for the table header.
pub fn emphasize(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_disabled() {
        assert_eq!(paint("dir", EntryKind::Directory, false), "dir");
        assert_eq!(emphasize("Name", false), "Name");
    }

    #[test]
    fn files_are_never_painted() {
        assert_eq!(paint("file", EntryKind::File, true), "file");
    }

    #[test]
    fn dirs_and_links_get_escape_codes() {
        let dir = paint("dir", EntryKind::Directory, true);
        let link = paint("link", EntryKind::Symlink, true);
        assert!(dir.contains("\x1b[") && dir.contains("dir"));
        assert!(link.contains("\x1b[") && link.contains("link"));
        assert_ne!(dir, "dir");
    }
}
