//! Application orchestration: state management, event loop, and input handling.

pub mod event;
pub mod handler;
pub mod layout;
pub mod popup;
pub mod state;
pub mod view;
