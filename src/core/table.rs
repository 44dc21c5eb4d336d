//! Table configuration and the view builder.
//!
//! [`Table`] borrows the caller's rows and columns, and [`Table::build`]
//! flattens them (together with the current [`ExpansionState`]) into a
//! [`TableView`]: the render artifact the UI layer draws.  Building is pure,
//! so a table can be rebuilt every frame.

use super::accessor::Record;
use super::column::TableColumn;
use super::expansion::ExpansionState;
use super::layout::{table_classes, FixedColumns, TableClass, TableSize};

/// Derives a row's key from the row and its index.
pub type RowKeyFn<'a, R> = Box<dyn Fn(&R, usize) -> String + 'a>;

/// Renders a row's expanded detail content.
pub type ExpandFn<'a, R> = Box<dyn Fn(&R) -> String + 'a>;

// ───────────────────────────────────────── view ──────────────

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub title: String,
    pub class_name: Option<String>,
}

/// A body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub content: String,
    pub class_name: Option<String>,
}

/// One row of the rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyRow {
    /// A data row: one cell per column.
    Data {
        key: String,
        /// Position of the row in the input row set.
        index: usize,
        cells: Vec<Cell>,
        expanded: bool,
    },
    /// Detail content shown directly below an expanded data row.
    Expansion {
        key: String,
        index: usize,
        content: String,
    },
}

impl BodyRow {
    pub fn key(&self) -> &str {
        match self {
            Self::Data { key, .. } | Self::Expansion { key, .. } => key,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Data { index, .. } | Self::Expansion { index, .. } => *index,
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }
}

/// Everything the widget needs to draw a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub header: Vec<HeaderCell>,
    pub body: Vec<BodyRow>,
    pub classes: Vec<TableClass>,
    /// Whether rows can be expanded (an expand renderer was supplied).
    pub expandable: bool,
}

impl TableView {
    pub fn has_class(&self, class: TableClass) -> bool {
        self.classes.contains(&class)
    }

    /// Size preset carried in the classes (medium if absent).
    pub fn size(&self) -> TableSize {
        self.classes
            .iter()
            .find_map(|c| match c {
                TableClass::Cell(size) => Some(*size),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn fixed(&self) -> FixedColumns {
        let mut fixed = FixedColumns::NONE;
        if self.has_class(TableClass::FixedFirstColumn) {
            fixed |= FixedColumns::FIRST;
        }
        if self.has_class(TableClass::FixedLastColumn) {
            fixed |= FixedColumns::LAST;
        }
        fixed
    }

    pub fn fill(&self) -> bool {
        self.has_class(TableClass::ContainerFill)
    }

    /// Number of data rows (expansion rows excluded).
    pub fn data_row_count(&self) -> usize {
        self.body.iter().filter(|r| r.is_data()).count()
    }
}

// ───────────────────────────────────────── table ─────────────

/// Table configuration, borrowed from the caller for one render.
pub struct Table<'a, R> {
    rows: &'a [R],
    columns: &'a [TableColumn<R>],
    row_key: RowKeyFn<'a, R>,
    expand_row_render: Option<ExpandFn<'a, R>>,
    fixed: FixedColumns,
    fill: bool,
    size: TableSize,
}

impl<'a, R: Record> Table<'a, R> {
    pub fn new<K>(rows: &'a [R], columns: &'a [TableColumn<R>], row_key: K) -> Self
    where
        K: Fn(&R, usize) -> String + 'a,
    {
        Self {
            rows,
            columns,
            row_key: Box::new(row_key),
            expand_row_render: None,
            fixed: FixedColumns::NONE,
            fill: false,
            size: TableSize::default(),
        }
    }

    /// Make rows expandable; `render` produces a row's detail content.
    pub fn expand_row_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&R) -> String + 'a,
    {
        self.expand_row_render = Some(Box::new(render));
        self
    }

    pub fn fixed(mut self, fixed: FixedColumns) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn size(mut self, size: TableSize) -> Self {
        self.size = size;
        self
    }

    pub fn rows(&self) -> &'a [R] {
        self.rows
    }

    pub fn columns(&self) -> &'a [TableColumn<R>] {
        self.columns
    }

    pub fn is_expandable(&self) -> bool {
        self.expand_row_render.is_some()
    }

    /// Key of the row at `index`, if any.
    pub fn row_key(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(|row| (self.row_key)(row, index))
    }

    /// Flatten configuration, rows, and expansion state into a view.
    pub fn build(&self, expansion: &ExpansionState) -> TableView {
        let header = self
            .columns
            .iter()
            .map(|col| HeaderCell {
                title: col.title.clone(),
                class_name: col.class_name.clone(),
            })
            .collect();

        let mut body = Vec::with_capacity(self.rows.len());
        for (index, row) in self.rows.iter().enumerate() {
            let key = (self.row_key)(row, index);
            let cells = self
                .columns
                .iter()
                .map(|col| Cell {
                    content: col.cell(row, index),
                    class_name: col.class_name.clone(),
                })
                .collect();

            let detail = self
                .expand_row_render
                .as_ref()
                .filter(|_| expansion.is_expanded(&key))
                .map(|render| render(row));

            body.push(BodyRow::Data {
                key: key.clone(),
                index,
                cells,
                expanded: detail.is_some(),
            });
            if let Some(content) = detail {
                body.push(BodyRow::Expansion { key, index, content });
            }
        }

        tracing::trace!(
            rows = self.rows.len(),
            body = body.len(),
            columns = self.columns.len(),
            "built table view"
        );

        TableView {
            header,
            body,
            classes: table_classes(self.fixed, self.fill, self.size),
            expandable: self.is_expandable(),
        }
    }
}
