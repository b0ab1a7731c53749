//! Terminal queries used when rendering to stdout.

use crossterm::tty::IsTty;

/// Width of the controlling terminal in columns.
///
/// Returns 0 when the width cannot be determined; the grid view treats that
/// as a single column.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) => usize::from(cols),
        Err(e) => {
            tracing::warn!("unable to read terminal width, printing one entry per line: {}", e);
            0
        }
    }
}

/// Whether stdout is attached to a terminal.
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_tty()
}
