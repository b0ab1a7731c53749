//! Filtering and display formatting for directory entries.
//!
//! Turns raw metadata (mode bits, byte counts, timestamps) into the text shown
//! by the grid and table views, and measures/pads that text by terminal
//! display width so multi-byte names still line up.

use crate::core::{DirectoryEntry, EntryKind};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthStr;

use std::borrow::Cow;
use std::fmt::Write;
use std::fs::Metadata;
use std::time::SystemTime;

/// Default strftime pattern for the Modified column, e.g. `Mar 4, 2024 - 9:15pm`.
pub const DEFAULT_TIME_FORMAT: &str = "%b %-d, %Y - %-I:%M%P";

// user, group, other: read/write/execute, in display order
#[cfg(unix)]
const MODE_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Stand-in for control characters in printed names.
pub const CONTROL_PLACEHOLDER: char = '?';

const KILO: u64 = 1_000;
const MEGA: u64 = 1_000_000;
const GIGA: u64 = 1_000_000_000;

/// Returns true if the name marks a hidden entry (leading dot).
#[inline]
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Replaces control characters (newlines, tabs, escapes) with
/// [CONTROL_PLACEHOLDER] so a name always prints as one inert line.
pub fn sanitize_name(name: &str) -> Cow<'_, str> {
    if !name.chars().any(char::is_control) {
        return Cow::Borrowed(name);
    }
    Cow::Owned(
        name.chars()
            .map(|c| if c.is_control() { CONTROL_PLACEHOLDER } else { c })
            .collect(),
    )
}

/// Iterates the entries that should be shown, keeping read order.
pub fn visible_entries(
    entries: &[DirectoryEntry],
    show_hidden: bool,
) -> impl Iterator<Item = &DirectoryEntry> {
    entries.iter().filter(move |e| show_hidden || !e.is_hidden())
}

/// Formats file permissions in the unix-like `drwxr-xr-x` form.
///
/// On Unix the type character is taken from the (non-followed) metadata and the
/// nine permission characters from the mode bits.
/// Elsewhere only the read-only flag is known, so the triplets are `r--` or `rw-`.
pub fn format_attributes(meta: &Metadata) -> String {
    let file_type = meta.file_type();
    let first = if file_type.is_dir() {
        'd'
    } else if file_type.is_symlink() {
        'l'
    } else {
        '-'
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = meta.permissions().mode();
        let mut out = String::with_capacity(10);
        out.push(first);
        for (mask, set) in MODE_BITS {
            out.push(if mode & mask != 0 { set } else { '-' });
        }
        out
    }
    #[cfg(not(unix))]
    {
        let triplet = if meta.permissions().readonly() {
            "r--"
        } else {
            "rw-"
        };
        let mut out = String::with_capacity(10);
        out.push(first);
        for _ in 0..3 {
            out.push_str(triplet);
        }
        out
    }
}

/// Formats a byte count.
///
/// Raw mode prints the plain number. Readable mode scales by powers of 1000
/// and truncates: `500` is `500 B`, `2500` is `2 K`, `5_000_000` is `5 M`.
pub fn format_size(bytes: u64, readable: bool) -> String {
    if !readable {
        return bytes.to_string();
    }
    match bytes {
        b if b < KILO => format!("{b} B"),
        b if b < MEGA => format!("{} K", b / KILO),
        b if b < GIGA => format!("{} M", b / MEGA),
        b => format!("{} G", b / GIGA),
    }
}

/// Formats the modification time in local time.
/// # Returns
/// The formatted time, or "-" if unknown or the pattern cannot be rendered.
pub fn format_file_time(modified: Option<SystemTime>, pattern: &str) -> String {
    let Some(mtime) = modified else {
        return "-".to_string();
    };
    let dt: DateTime<Local> = DateTime::from(mtime);
    let mut out = String::new();
    // A bad pattern surfaces as fmt::Error here instead of a panic in to_string.
    if write!(out, "{}", dt.format(pattern)).is_err() {
        return "-".to_string();
    }
    out
}

/// Checks that a strftime pattern parses without errors.
pub fn is_valid_time_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Lower-case label for the Type column.
pub fn format_entry_kind(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::File => "file",
        EntryKind::Directory => "directory",
        EntryKind::Symlink => "symlink",
    }
}

/// Terminal display width of a string.
#[inline]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pads `text` with trailing spaces up to `width` display columns.
/// Text already at or beyond `width` is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = display_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(current));
    out.push_str(text);
    if current < width {
        out.push_str(&" ".repeat(width - current));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn readable_sizes_truncate() {
        let cases = [
            (0, "0 B"),
            (500, "500 B"),
            (999, "999 B"),
            (1_000, "1 K"),
            (2_500, "2 K"),
            (999_999, "999 K"),
            (1_000_000, "1 M"),
            (5_000_000, "5 M"),
            (5_999_999, "5 M"),
            (1_000_000_000, "1 G"),
            (12_345_678_901, "12 G"),
        ];
        for (bytes, expected) in cases {
            assert_eq!(format_size(bytes, true), expected, "bytes = {bytes}");
        }
    }

    #[test]
    fn raw_sizes_are_plain_numbers() {
        assert_eq!(format_size(2_500, false), "2500");
        assert_eq!(format_size(0, false), "0");
    }

    #[test]
    fn hidden_names() {
        assert!(is_hidden_name(".git"));
        assert!(is_hidden_name("."));
        assert!(!is_hidden_name("README"));
        assert!(!is_hidden_name("a.b"));
    }

    #[test]
    fn control_characters_are_replaced() {
        assert_eq!(sanitize_name("plain.txt"), "plain.txt");
        assert!(matches!(sanitize_name("plain.txt"), Cow::Borrowed(_)));
        assert_eq!(sanitize_name("a\nb"), "a?b");
        assert_eq!(sanitize_name("evil\x1b[31mred"), "evil?[31mred");
        assert_eq!(sanitize_name("tab\there"), "tab?here");
        assert_eq!(display_width(&sanitize_name("a\nb")), 3);
    }

    #[test]
    fn time_formatting() {
        let t = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(format_file_time(None, DEFAULT_TIME_FORMAT), "-");
        assert_eq!(format_file_time(Some(t), "%Y"), "2023");
        assert!(!format_file_time(Some(t), DEFAULT_TIME_FORMAT).is_empty());
        assert_eq!(format_file_time(Some(t), "%Q"), "-");
    }

    #[test]
    fn time_format_validation() {
        assert!(is_valid_time_format(DEFAULT_TIME_FORMAT));
        assert!(is_valid_time_format("%Y-%m-%d %H:%M:%S"));
        assert!(!is_valid_time_format("%Q"));
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
        // Two-column wide glyph counts as 2.
        let padded = pad_to_width("🦀", 4);
        assert_eq!(display_width(&padded), 4);
        assert_eq!(padded, "🦀  ");
    }

    #[cfg(unix)]
    #[test]
    fn attributes_for_dir_and_file() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir()?;
        let file = tmp.path().join("f.txt");
        std::fs::write(&file, b"x")?;
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o640))?;
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o755))?;

        assert_eq!(format_attributes(&std::fs::metadata(&file)?), "-rw-r-----");
        assert_eq!(
            format_attributes(&std::fs::metadata(tmp.path())?),
            "drwxr-xr-x"
        );
        Ok(())
    }
}
