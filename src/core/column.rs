//! Column descriptors.

use super::accessor::{Accessor, Record};

/// One column of a table: a title, an optional style class, and the
/// accessor that produces its cells.
#[derive(Debug)]
pub struct TableColumn<R> {
    pub title: String,
    /// Style class applied to this column's header and body cells.  Looked
    /// up in the widget's stylesheet (mostly to pin a width).
    pub class_name: Option<String>,
    pub render: Accessor<R>,
}

impl<R> TableColumn<R> {
    pub fn new(title: impl Into<String>, render: Accessor<R>) -> Self {
        Self {
            title: title.into(),
            class_name: None,
            render,
        }
    }

    /// Column that displays a named field of the row.
    pub fn field(title: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(title, Accessor::field(name))
    }

    /// Column whose cells are computed from `(row, index)`.
    pub fn computed<F>(title: impl Into<String>, f: F) -> Self
    where
        F: Fn(&R, usize) -> String + Send + Sync + 'static,
    {
        Self::new(title, Accessor::computed(f))
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }
}

impl<R: Record> TableColumn<R> {
    /// Content of this column's cell for `row` at `index`.
    pub fn cell(&self, row: &R, index: usize) -> String {
        self.render.resolve(row, index)
    }
}
