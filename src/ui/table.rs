//! Table view: one bordered row per entry with its metadata.

use crate::core::{
    DirectoryEntry, EntryKind, display_width, format_entry_kind, pad_to_width, visible_entries,
};
use crate::ui::style::{emphasize, paint};

use std::io::{self, Write};

/// Column titles, in display order.
pub const HEADERS: [&str; 7] = [
    "Name",
    "Permissions",
    "Type",
    "Size",
    "Owner",
    "Group",
    "Modified",
];

const COLUMNS: usize = HEADERS.len();

// Heavy box-drawing set: left, joint, right, horizontal rule.
const TOP: [char; 3] = ['┏', '┳', '┓'];
const MIDDLE: [char; 3] = ['┣', '╋', '┫'];
const BOTTOM: [char; 3] = ['┗', '┻', '┛'];
const RULE: char = '━';
const BAR: char = '┃';

#[derive(Debug, Clone)]
pub struct TableFormatter {
    show_hidden: bool,
    color: bool,
}

impl TableFormatter {
    pub fn new(show_hidden: bool, color: bool) -> Self {
        Self { show_hidden, color }
    }

    /// Writes the header, a separator, then one row per visible entry in read order.
    pub fn render<W: Write + ?Sized>(
        &self,
        entries: &[DirectoryEntry],
        out: &mut W,
    ) -> io::Result<()> {
        let rows: Vec<(EntryKind, [String; COLUMNS])> =
            visible_entries(entries, self.show_hidden)
                .map(|e| (e.kind(), row_cells(e)))
                .collect();

        let mut widths = HEADERS.map(display_width);
        for (_, cells) in &rows {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(display_width(cell));
            }
        }

        writeln!(out, "{}", rule_line(&widths, TOP))?;
        let header: [String; COLUMNS] = std::array::from_fn(|i| {
            emphasize(&pad_to_width(HEADERS[i], widths[i]), self.color)
        });
        writeln!(out, "{}", cell_line(&header))?;
        writeln!(out, "{}", rule_line(&widths, MIDDLE))?;

        for (kind, cells) in &rows {
            let mut padded: [String; COLUMNS] =
                std::array::from_fn(|i| pad_to_width(&cells[i], widths[i]));
            padded[0] = paint(&padded[0], *kind, self.color);
            writeln!(out, "{}", cell_line(&padded))?;
        }

        writeln!(out, "{}", rule_line(&widths, BOTTOM))?;
        Ok(())
    }
}

fn row_cells(entry: &DirectoryEntry) -> [String; COLUMNS] {
    [
        entry.long_name(),
        entry.permissions().to_string(),
        format_entry_kind(entry.kind()).to_string(),
        entry.size().to_string(),
        entry.owner().to_string(),
        entry.group().to_string(),
        entry.modified().to_string(),
    ]
}

fn rule_line(widths: &[usize; COLUMNS], [left, joint, right]: [char; 3]) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(joint);
        }
        line.extend(std::iter::repeat_n(RULE, width + 2));
    }
    line.push(right);
    line
}

fn cell_line(cells: &[String; COLUMNS]) -> String {
    let mut line = String::new();
    line.push(BAR);
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push(' ');
        line.push(BAR);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_span_every_column() {
        let widths = [1, 2, 3, 4, 5, 6, 7];
        let line = rule_line(&widths, TOP);
        assert!(line.starts_with('┏') && line.ends_with('┓'));
        assert_eq!(line.chars().filter(|c| *c == '┳').count(), COLUMNS - 1);
        let rules: usize = widths.iter().map(|w| w + 2).sum();
        assert_eq!(line.chars().filter(|c| *c == RULE).count(), rules);
    }

    #[test]
    fn empty_listing_still_has_header() -> io::Result<()> {
        let mut out = Vec::new();
        TableFormatter::new(false, false).render(&[], &mut out)?;
        let text = String::from_utf8_lossy(&out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for header in HEADERS {
            assert!(lines[1].contains(header));
        }
        Ok(())
    }
}
