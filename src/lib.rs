//! Terminal table components for Ratatui.
//!
//! [`core`] holds the renderer-agnostic table model: column accessors,
//! fixed-column flags, size presets, and row expansion state.  [`ui`] draws
//! the resulting [`core::TableView`] with Ratatui and maps clicks back to
//! rows.

pub mod core;
pub mod error;
pub mod ui;

pub use error::{Error, Result};
