//! Frame drawing: composes the table, summary line, status bar, and help
//! overlay.

use ratatui::{
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tabula::ui::{TableWidget, Theme};

use super::layout::AppLayout;
use super::popup::{HelpEntry, HelpPopup};
use super::state::{ActiveView, AppState};
use crate::config::{config_path, Action};

/// Bordered block around the table pane.
pub fn table_block(state: &AppState) -> Block<'static> {
    Block::default()
        .title(format!(" {} ({} rows) ", state.source, state.books.len()))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style())
}

pub fn draw(frame: &mut Frame, state: &mut AppState) {
    state.terminal_area = frame.area();
    let layout = AppLayout::from_area(frame.area());

    let view = state.view();
    let table = TableWidget::new(&view)
        .stylesheet(&state.config.stylesheet)
        .block(table_block(state));
    frame.render_stateful_widget(table, layout.table_area, &mut state.table_state);

    let summary = Paragraph::new(state.settings.summary()).style(Theme::hint_style());
    frame.render_widget(summary, layout.summary_area);

    let hint = state.config.status_bar_hint();
    let status_text = match state.active_view {
        ActiveView::Table => state.status_message.as_deref().unwrap_or(&hint),
        ActiveView::Help => "",
    };
    let status = Paragraph::new(status_text).style(Theme::status_bar_style());
    frame.render_widget(status, layout.status_area);

    if state.active_view == ActiveView::Help {
        let entries: Vec<HelpEntry> = Action::ALL
            .iter()
            .map(|&action| HelpEntry {
                label: action.label().to_string(),
                keys: state.config.display_bindings(action),
            })
            .collect();
        let footer = format!("config: {}", config_path().display());
        frame.render_widget(
            HelpPopup {
                entries: &entries,
                footer: Some(&footer),
            },
            frame.area(),
        );
    }
}
