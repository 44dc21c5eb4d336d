//! Core table model: accessors, columns, layout flags, expansion state,
//! and the view builder.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod accessor;
pub mod column;
pub mod expansion;
pub mod layout;
pub mod table;

pub use accessor::{Accessor, ComputeFn, Record};
pub use column::TableColumn;
pub use expansion::ExpansionState;
pub use layout::{table_classes, FixedColumns, TableClass, TableSize};
pub use table::{BodyRow, Cell, ExpandFn, HeaderCell, RowKeyFn, Table, TableView};
