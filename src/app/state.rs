//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;
use tabula::core::{FixedColumns, Table, TableColumn, TableSize, TableView};
use tabula::ui::TableWidgetState;

use crate::catalog::{self, Book};
use crate::config::AppConfig;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Table,
    Help,
}

/// Runtime table settings (seeded from config, overridden by CLI flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSettings {
    pub size: TableSize,
    pub fixed: FixedColumns,
    pub fill: bool,
    /// Whether rows get an expand renderer.
    pub expandable: bool,
}

impl TableSettings {
    pub fn summary(&self) -> String {
        format!(
            " size: {} | fixed: {} | fill: {} | expand: {}",
            self.size,
            self.fixed,
            if self.fill { "on" } else { "off" },
            if self.expandable { "on" } else { "off" },
        )
    }
}

/// Assemble the table for one frame (or one hit test).
///
/// Takes the pieces separately so callers can keep a mutable borrow of the
/// widget state alive alongside it.
pub fn build_table<'a>(
    books: &'a [Book],
    columns: &'a [TableColumn<Book>],
    settings: TableSettings,
) -> Table<'a, Book> {
    let table = Table::new(books, columns, catalog::book_key)
        .fixed(settings.fixed)
        .fill(settings.fill)
        .size(settings.size);
    if settings.expandable {
        table.expand_row_render(catalog::book_detail)
    } else {
        table
    }
}

/// Top-level application state.
pub struct AppState {
    /// Rows shown in the table.
    pub books: Vec<Book>,
    pub columns: Vec<TableColumn<Book>>,
    /// Widget-level state (selection, scroll, expanded rows).
    pub table_state: TableWidgetState,
    pub settings: TableSettings,
    /// Where the rows came from (shown in the table title).
    pub source: String,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    pub active_view: ActiveView,
    /// User-configurable keybindings and defaults.
    pub config: AppConfig,
    /// Last drawn terminal area (for mouse hit testing).
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(books: Vec<Book>, source: String, config: AppConfig, settings: TableSettings) -> Self {
        Self {
            books,
            columns: catalog::columns(),
            table_state: TableWidgetState::default(),
            settings,
            source,
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            config,
            terminal_area: Rect::default(),
        }
    }

    /// Build the current table view.
    pub fn view(&self) -> TableView {
        build_table(&self.books, &self.columns, self.settings).build(&self.table_state.expansion)
    }
}
