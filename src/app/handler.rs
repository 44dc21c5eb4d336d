//! Input handling: maps key/mouse events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tabula::ui::{scrollable_column_count, TableHit, TableWidget};

use super::layout::AppLayout;
use super::state::{build_table, ActiveView, AppState};
use super::view::table_block;
use crate::config::{config_path, Action};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Table => handle_table_key(state, key),
        ActiveView::Help => handle_help_key(state, key),
    }
}

fn handle_help_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Esc || state.config.match_key(key) == Some(Action::ShowHelp) {
        state.active_view = ActiveView::Table;
    } else if state.config.match_key(key) == Some(Action::Quit) {
        state.should_quit = true;
    }
}

// ── Table view (configurable bindings) ──────────────────────────

fn handle_table_key(state: &mut AppState, key: KeyEvent) {
    // Navigation keys that always work.
    match key.code {
        KeyCode::Home => {
            state.table_state.selected = 0;
            state.table_state.offset = 0;
            return;
        }
        KeyCode::End => {
            state.table_state.selected = state.books.len().saturating_sub(1);
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;
    apply_action(state, action);
}

/// Perform one user action against the table.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::Quit => state.should_quit = true,
        Action::ShowHelp => state.active_view = ActiveView::Help,
        Action::MoveUp => state.table_state.select_prev(),
        Action::MoveDown => state.table_state.select_next(state.books.len()),
        Action::ToggleRow => {
            let index = state.table_state.selected;
            toggle_row(state, index);
        }
        Action::ScrollLeft => state.table_state.scroll_left(),
        Action::ScrollRight => {
            let max = scrollable_column_count(&state.view());
            state.table_state.scroll_right(max);
        }
        Action::CycleSize => {
            state.settings.size = state.settings.size.next();
            state.status_message = Some(format!("Size: {}", state.settings.size));
        }
        Action::CycleFixed => {
            state.settings.fixed = state.settings.fixed.next();
            state.table_state.h_offset = 0;
            state.status_message = Some(format!("Fixed columns: {}", state.settings.fixed));
        }
        Action::ToggleFill => {
            state.settings.fill = !state.settings.fill;
            state.status_message = Some(format!(
                "Fill width: {}",
                if state.settings.fill { "on" } else { "off" }
            ));
        }
        Action::CollapseAll => {
            state.table_state.expansion.reset();
            state.status_message = Some("Collapsed all rows".into());
        }
        Action::SaveSettings => save_settings(state),
    }
}

fn toggle_row(state: &mut AppState, index: usize) {
    let table = build_table(&state.books, &state.columns, state.settings);
    match state.table_state.toggle_row(&table, index) {
        Some((_, expanded)) => {
            let title = state.books.get(index).map_or("", |b| b.title.as_str());
            let verb = if expanded { "Expanded" } else { "Collapsed" };
            state.status_message = Some(format!("{verb}: {title}"));
        }
        None if !table.is_expandable() => {
            state.status_message = Some("Rows are not expandable (--no-expand)".into());
        }
        None => {}
    }
}

/// Make the current size/fixed/fill the config defaults and persist them.
fn save_settings(state: &mut AppState) {
    state.config.size = state.settings.size;
    state.config.fixed = state.settings.fixed;
    state.config.fill = state.settings.fill;
    state.status_message = Some(match state.config.save() {
        Ok(()) => format!("Saved settings to {}", config_path().display()),
        Err(e) => {
            tracing::warn!("saving config: {e}");
            format!("Could not save settings: {e}")
        }
    });
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Table {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(hit) = hit_test(state, mouse.column, mouse.row) else {
                return;
            };
            match hit {
                TableHit::Row(index) | TableHit::Expansion(index) => {
                    state.table_state.selected = index;
                    toggle_row(state, index);
                }
                TableHit::Header => {}
            }
        }
        MouseEventKind::ScrollDown => state.table_state.select_next(state.books.len()),
        MouseEventKind::ScrollUp => state.table_state.select_prev(),
        MouseEventKind::ScrollRight => apply_action(state, Action::ScrollRight),
        MouseEventKind::ScrollLeft => apply_action(state, Action::ScrollLeft),
        _ => {}
    }
}

/// Which part of the table sits under a screen position.
fn hit_test(state: &AppState, column: u16, row: u16) -> Option<TableHit> {
    let layout = AppLayout::from_area(state.terminal_area);
    let view = state.view();
    TableWidget::new(&view)
        .stylesheet(&state.config.stylesheet)
        .block(table_block(state))
        .hit_test(layout.table_area, &state.table_state, column, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::TableSettings;
    use crate::catalog;
    use crate::config::AppConfig;
    use ratatui::layout::Rect;
    use tabula::core::{FixedColumns, TableSize};

    fn state(expandable: bool) -> AppState {
        let settings = TableSettings {
            size: TableSize::Medium,
            fixed: FixedColumns::NONE,
            fill: false,
            expandable,
        };
        let mut state = AppState::new(catalog::sample(), "sample".into(), AppConfig::default(), settings);
        state.terminal_area = Rect::new(0, 0, 120, 30);
        state
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn enter_toggles_selected_row() {
        let mut s = state(true);
        handle_key(&mut s, press(KeyCode::Down));
        handle_key(&mut s, press(KeyCode::Enter));
        let key = s.books[1].isbn.clone();
        assert!(s.table_state.expansion.is_expanded(&key));
        assert_eq!(s.view().body.len(), s.books.len() + 1);

        handle_key(&mut s, press(KeyCode::Enter));
        assert!(s.table_state.expansion.is_empty());
    }

    #[test]
    fn toggle_without_renderer_reports_status() {
        let mut s = state(false);
        handle_key(&mut s, press(KeyCode::Enter));
        assert!(s.table_state.expansion.is_empty());
        assert!(s.status_message.as_deref().unwrap_or_default().contains("not expandable"));
    }

    #[test]
    fn click_on_row_selects_and_toggles() {
        let mut s = state(true);
        // Border (y=0), header (1), separator (2), first body line (3).
        handle_mouse(&mut s, click(5, 4));
        assert_eq!(s.table_state.selected, 1);
        assert!(s.table_state.expansion.is_expanded(&s.books[1].isbn));

        // Row 1 is now followed by its detail lines; clicking the detail
        // collapses it again.
        handle_mouse(&mut s, click(5, 5));
        assert!(s.table_state.expansion.is_empty());

        // Header clicks do nothing.
        handle_mouse(&mut s, click(5, 1));
        assert!(s.table_state.expansion.is_empty());
    }

    #[test]
    fn settings_cycle_and_collapse_all() {
        let mut s = state(true);
        apply_action(&mut s, Action::CycleSize);
        assert_eq!(s.settings.size, TableSize::Large);
        apply_action(&mut s, Action::CycleFixed);
        assert_eq!(s.settings.fixed, FixedColumns::FIRST);
        apply_action(&mut s, Action::ToggleFill);
        assert!(s.settings.fill);

        apply_action(&mut s, Action::ToggleRow);
        assert_eq!(s.table_state.expansion.len(), 1);
        apply_action(&mut s, Action::CollapseAll);
        assert!(s.table_state.expansion.is_empty());
    }

    #[test]
    fn horizontal_scroll_is_bounded() {
        let mut s = state(true);
        for _ in 0..20 {
            apply_action(&mut s, Action::ScrollRight);
        }
        assert_eq!(s.table_state.h_offset, s.columns.len() - 1);
        apply_action(&mut s, Action::ScrollLeft);
        assert_eq!(s.table_state.h_offset, s.columns.len() - 2);
    }

    #[test]
    fn help_view_swallows_table_keys() {
        let mut s = state(true);
        handle_key(&mut s, press(KeyCode::Char('?')));
        assert_eq!(s.active_view, ActiveView::Help);
        handle_key(&mut s, press(KeyCode::Enter));
        assert!(s.table_state.expansion.is_empty());
        handle_key(&mut s, press(KeyCode::Esc));
        assert_eq!(s.active_view, ActiveView::Table);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut s = state(true);
        s.active_view = ActiveView::Help;
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(s.should_quit);
    }
}
