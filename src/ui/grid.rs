//! Compact grid view: names only, in fixed-width columns sized to the terminal.

use crate::core::{DirectoryEntry, display_width, pad_to_width, visible_entries};
use crate::ui::style::paint;

use std::borrow::Cow;
use std::io::{self, Write};

/// Spaces between two grid columns.
pub const COLUMN_GAP: usize = 2;

/// Number of names per grid line for a terminal width and the longest name.
/// Never less than one, so an unknown (zero) width prints one name per line.
#[inline]
pub fn grid_columns(term_width: usize, max_name_width: usize) -> usize {
    (term_width / (max_name_width + COLUMN_GAP)).max(1)
}

#[derive(Debug, Clone)]
pub struct GridFormatter {
    show_hidden: bool,
    color: bool,
    term_width: usize,
}

impl GridFormatter {
    pub fn new(show_hidden: bool, color: bool, term_width: usize) -> Self {
        Self {
            show_hidden,
            color,
            term_width,
        }
    }

    /// Writes the visible names, each padded to the widest visible name plus
    /// [COLUMN_GAP], wrapping after [grid_columns] names.
    pub fn render<W: Write + ?Sized>(
        &self,
        entries: &[DirectoryEntry],
        out: &mut W,
    ) -> io::Result<()> {
        let visible: Vec<(&DirectoryEntry, Cow<'_, str>)> =
            visible_entries(entries, self.show_hidden)
                .map(|e| (e, e.display_name()))
                .collect();
        let Some(max_width) = visible.iter().map(|(_, name)| display_width(name)).max() else {
            return Ok(());
        };

        let columns = grid_columns(self.term_width, max_width);
        let cell_width = max_width + COLUMN_GAP;

        for row in visible.chunks(columns) {
            let mut line = String::with_capacity(columns * cell_width);
            for (entry, name) in row {
                let cell = pad_to_width(name, cell_width);
                line.push_str(&paint(&cell, entry.kind(), self.color));
            }
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
