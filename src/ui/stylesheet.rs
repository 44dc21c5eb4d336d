//! Class-name stylesheet for table columns.
//!
//! Columns carry an optional class name; the stylesheet maps it to a fixed
//! width and a style patch applied to that column's cells.

use std::collections::HashMap;

use ratatui::style::{Modifier, Style};

use super::theme::parse_color;

/// Styling attached to one class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassStyle {
    /// Content width in columns (padding excluded).  `None` sizes the
    /// column to its content.
    pub width: Option<u16>,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    classes: HashMap<String, ClassStyle>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, class: ClassStyle) {
        self.classes.insert(name.into(), class);
    }

    pub fn get(&self, name: &str) -> Option<&ClassStyle> {
        self.classes.get(name)
    }

    /// Resolve an optional class name (as found on a cell).
    pub fn lookup(&self, name: Option<&str>) -> Option<&ClassStyle> {
        name.and_then(|n| self.get(n))
    }

    /// Iterate classes sorted by name (stable output for serialisation).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassStyle)> {
        let mut entries: Vec<_> = self.classes.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Apply one `class.<name>.<property> = value` entry.  `property` is
    /// `width`, `fg`, `bg`, `bold`, or `italic`.
    pub fn apply(&mut self, name: &str, property: &str, value: &str) -> Result<(), String> {
        let entry = self.classes.entry(name.to_string()).or_default();
        match property {
            "width" => {
                let w: u16 = value
                    .parse()
                    .map_err(|_| format!("invalid width `{value}`"))?;
                entry.width = Some(w);
            }
            "fg" => {
                let c = parse_color(value).ok_or_else(|| format!("unknown colour `{value}`"))?;
                entry.style = entry.style.fg(c);
            }
            "bg" => {
                let c = parse_color(value).ok_or_else(|| format!("unknown colour `{value}`"))?;
                entry.style = entry.style.bg(c);
            }
            "bold" => {
                if parse_bool(value)? {
                    entry.style = entry.style.add_modifier(Modifier::BOLD);
                }
            }
            "italic" => {
                if parse_bool(value)? {
                    entry.style = entry.style.add_modifier(Modifier::ITALIC);
                }
            }
            other => return Err(format!("unknown class property `{other}`")),
        }
        Ok(())
    }
}

/// Strict `true`/`false` parsing shared by config values.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected true/false, got `{other}`")),
    }
}
