//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes the *core* table view and turns it into cells in a
//! terminal buffer.  No file I/O happens here.

pub mod stylesheet;
pub mod table_widget;
pub mod theme;

pub use stylesheet::{ClassStyle, StyleSheet};
pub use table_widget::{scrollable_column_count, TableHit, TableWidget, TableWidgetState};
pub use theme::{Background, Border, TextWeight, Theme};
