//! Cell accessors: how a column pulls displayable content out of a row.
//!
//! A column either names a field of the row ([`Accessor::Field`]) or
//! computes its content from the row and its position
//! ([`Accessor::Computed`]).  Both cases go through [`Accessor::resolve`].

use std::fmt;

// ───────────────────────────────────────── record ────────────

/// Keyed field access on an application row type.
///
/// Implement this for any type used with [`Accessor::Field`].  Return `None`
/// for names the type doesn't know; the cell then renders empty.
pub trait Record {
    fn field(&self, name: &str) -> Option<String>;
}

// ───────────────────────────────────────── accessor ──────────

/// Closure signature for computed cells: `(row, index) → content`.
pub type ComputeFn<R> = Box<dyn Fn(&R, usize) -> String + Send + Sync>;

/// How a column extracts a cell's content from a row.
pub enum Accessor<R> {
    /// Read a named field via [`Record::field`].
    Field(String),
    /// Compute the content from the row and its index in the row set.
    Computed(ComputeFn<R>),
}

impl<R> Accessor<R> {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&R, usize) -> String + Send + Sync + 'static,
    {
        Self::Computed(Box::new(f))
    }
}

impl<R: Record> Accessor<R> {
    /// Resolve this accessor against `row` at position `index`.
    pub fn resolve(&self, row: &R, index: usize) -> String {
        match self {
            Self::Field(name) => row.field(name).unwrap_or_default(),
            Self::Computed(f) => f(row, index),
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}
