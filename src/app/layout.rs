//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen layout: table pane, a one-line settings summary, and a bottom
/// status bar.
pub struct AppLayout {
    pub table_area: Rect,
    pub summary_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),    // table pane (header + separator + rows)
                Constraint::Length(1), // size / fixed / fill summary
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            table_area: chunks[0],
            summary_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
