//! Expand/collapse state for table rows.

use std::collections::HashSet;

/// Set of currently expanded row keys.
///
/// A key absent from the set is collapsed.  Rows sharing a key share one
/// entry, so duplicate keys toggle together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Expand (`true`) or collapse (`false`) the row with `key`.
    pub fn set(&mut self, key: &str, value: bool) {
        if value {
            self.expanded.insert(key.to_string());
        } else {
            self.expanded.remove(key);
        }
    }

    /// Flip the row with `key` and return its new state.
    pub fn toggle(&mut self, key: &str) -> bool {
        let next = !self.is_expanded(key);
        self.set(key, next);
        next
    }

    /// Collapse everything.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}
