//! Layout knobs: fixed-column flags, size presets, and the layout classes
//! derived from them.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

// ───────────────────────────────────────── fixed columns ─────

/// Which edge columns stay put while the rest of the table scrolls.
///
/// Bits are independent, so `FIRST | LAST` fixes both edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedColumns(u8);

impl FixedColumns {
    pub const NONE: Self = Self(0);
    pub const FIRST: Self = Self(1 << 0);
    pub const LAST: Self = Self(1 << 1);
    pub const BOTH: Self = Self(Self::FIRST.0 | Self::LAST.0);

    const MASK: u8 = Self::BOTH.0;

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build from raw bits, dropping any that aren't a known flag.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Next value in the `none → first → last → both` cycle.
    pub fn next(self) -> Self {
        Self::from_bits_truncate(self.0.wrapping_add(1))
    }

    pub fn label(self) -> &'static str {
        match (self.contains(Self::FIRST), self.contains(Self::LAST)) {
            (false, false) => "none",
            (true, false) => "first",
            (false, true) => "last",
            (true, true) => "both",
        }
    }

    /// Parse `none`, `first`, `last`, `both`, or `first|last`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut flags = Self::NONE;
        for part in s.split(['|', ',', '+']) {
            match part.trim().to_lowercase().as_str() {
                "" | "none" => {}
                "first" => flags |= Self::FIRST,
                "last" => flags |= Self::LAST,
                "both" => flags |= Self::BOTH,
                _ => return None,
            }
        }
        Some(flags)
    }
}

impl BitOr for FixedColumns {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FixedColumns {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for FixedColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ───────────────────────────────────────── size preset ───────

/// Cell-sizing preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TableSize {
    pub const ALL: &[TableSize] = &[TableSize::Small, TableSize::Medium, TableSize::Large];

    pub fn label(self) -> &'static str {
        match self {
            TableSize::Small => "small",
            TableSize::Medium => "medium",
            TableSize::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" => Some(TableSize::Small),
            "medium" | "m" => Some(TableSize::Medium),
            "large" | "l" => Some(TableSize::Large),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(1);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Blank columns on each side of a cell's content.
    pub fn cell_padding(self) -> u16 {
        match self {
            TableSize::Small => 0,
            TableSize::Medium => 1,
            TableSize::Large => 2,
        }
    }
}

impl fmt::Display for TableSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ───────────────────────────────────────── classes ───────────

/// Layout classes attached to a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableClass {
    Container,
    ContainerFill,
    BackgroundStrong,
    Cell(TableSize),
    FixedContainer,
    FixedFirstColumn,
    FixedLastColumn,
}

/// Layout classes for a table, derived from its configuration alone.
pub fn table_classes(fixed: FixedColumns, fill: bool, size: TableSize) -> Vec<TableClass> {
    let mut classes = vec![TableClass::Container];
    if fill {
        classes.push(TableClass::ContainerFill);
    }
    classes.push(TableClass::BackgroundStrong);
    classes.push(TableClass::Cell(size));

    if fixed.is_empty() {
        return classes;
    }
    classes.push(TableClass::FixedContainer);
    if fixed.contains(FixedColumns::FIRST) {
        classes.push(TableClass::FixedFirstColumn);
    }
    if fixed.contains(FixedColumns::LAST) {
        classes.push(TableClass::FixedLastColumn);
    }
    classes
}
