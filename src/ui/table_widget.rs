//! Custom Ratatui widget that draws a [`TableView`] as a header, a
//! separator, and a scrollable body with expandable rows and optional
//! fixed edge columns.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::{
    accessor::Record,
    expansion::ExpansionState,
    layout::{FixedColumns, TableClass},
    table::{BodyRow, Cell, Table, TableView},
};

use super::stylesheet::StyleSheet;
use super::theme::Theme;

/// Width of the expand/collapse gutter (`▶ `).
const GUTTER_WIDTH: u16 = 2;
/// Lines taken by the header and its separator.
const HEADER_LINES: u16 = 2;

// ───────────────────────────────────────── state ─────────────

/// Persistent state for the table widget: selection, scroll offsets, and
/// the expanded row keys.
#[derive(Debug, Default)]
pub struct TableWidgetState {
    /// Index of the highlighted *data* row in the input row set.
    pub selected: usize,
    /// First visible body line.
    pub offset: usize,
    /// Number of scrollable columns scrolled past on the left.
    pub h_offset: usize,
    pub expansion: ExpansionState,
}

impl TableWidgetState {
    pub fn select_next(&mut self, max: usize) {
        if max > 0 && self.selected < max - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn scroll_left(&mut self) {
        self.h_offset = self.h_offset.saturating_sub(1);
    }

    /// Scroll one column right; `max` is the number of scrollable columns.
    pub fn scroll_right(&mut self, max: usize) {
        if max > 0 && self.h_offset < max - 1 {
            self.h_offset += 1;
        }
    }

    /// Toggle the row at `index`.  Returns the row's key and its new state,
    /// or `None` when the table isn't expandable or the index is out of range.
    pub fn toggle_row<R: Record>(&mut self, table: &Table<'_, R>, index: usize) -> Option<(String, bool)> {
        if !table.is_expandable() {
            return None;
        }
        let key = table.row_key(index)?;
        let expanded = self.expansion.toggle(&key);
        tracing::debug!(%key, expanded, "toggled row");
        Some((key, expanded))
    }

    pub fn toggle_selected<R: Record>(&mut self, table: &Table<'_, R>) -> Option<(String, bool)> {
        self.toggle_row(table, self.selected)
    }

    /// Forget selection, scroll, and expansion, as if freshly mounted.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Keep the selected row's line within a viewport of `height` lines.
    fn clamp_scroll(&mut self, lines: &[BodyLine<'_>], height: usize) {
        let data_rows = lines
            .iter()
            .filter(|l| matches!(l.kind, LineKind::Data { .. }))
            .count();
        if data_rows == 0 {
            self.selected = 0;
            self.offset = 0;
            return;
        }
        self.selected = self.selected.min(data_rows - 1);
        if height == 0 {
            self.offset = self.offset.min(lines.len() - 1);
            return;
        }
        // Never leave blank space below the last line while lines above
        // are scrolled away.
        self.offset = self.offset.min(lines.len().saturating_sub(height));

        let Some(line) = lines
            .iter()
            .position(|l| l.index == self.selected && matches!(l.kind, LineKind::Data { .. }))
        else {
            return;
        };
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + height {
            self.offset = line + 1 - height;
        }
    }
}

// ───────────────────────────────────────── line model ────────

/// One screen line of the table body.
#[derive(Debug)]
struct BodyLine<'v> {
    /// Index of the owning row in the input row set.
    index: usize,
    kind: LineKind<'v>,
}

#[derive(Debug)]
enum LineKind<'v> {
    Data { cells: &'v [Cell], expanded: bool },
    Detail { text: &'v str },
}

/// Flatten body rows into screen lines.  A data row is one line; an
/// expansion row is one line per line of content (at least one).
fn body_lines(view: &TableView) -> Vec<BodyLine<'_>> {
    let mut lines = Vec::with_capacity(view.body.len());
    for row in &view.body {
        match row {
            BodyRow::Data {
                index,
                cells,
                expanded,
                ..
            } => lines.push(BodyLine {
                index: *index,
                kind: LineKind::Data {
                    cells,
                    expanded: *expanded,
                },
            }),
            BodyRow::Expansion { index, content, .. } => {
                let mut any = false;
                for text in content.lines() {
                    any = true;
                    lines.push(BodyLine {
                        index: *index,
                        kind: LineKind::Detail { text },
                    });
                }
                if !any {
                    lines.push(BodyLine {
                        index: *index,
                        kind: LineKind::Detail { text: "" },
                    });
                }
            }
        }
    }
    lines
}

// ───────────────────────────────────────── geometry ──────────

/// A column placed on screen for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placed {
    column: usize,
    x: u16,
    width: u16,
    fixed: bool,
}

/// Horizontal layout for one frame.
#[derive(Debug)]
struct Geometry {
    /// Total width of the table (gutter included), clipped to the area.
    table_width: u16,
    gutter: u16,
    padding: u16,
    placed: Vec<Placed>,
}

fn text_width(s: &str) -> u16 {
    u16::try_from(Span::raw(s).width()).unwrap_or(u16::MAX)
}

/// Full width of every column: stylesheet width or widest content, plus
/// padding on both sides.
fn column_widths(view: &TableView, sheet: Option<&StyleSheet>, padding: u16) -> Vec<u16> {
    view.header
        .iter()
        .enumerate()
        .map(|(i, head)| {
            let pinned = sheet
                .and_then(|s| s.lookup(head.class_name.as_deref()))
                .and_then(|c| c.width);
            let content = pinned.unwrap_or_else(|| {
                view.body
                    .iter()
                    .filter_map(|row| match row {
                        BodyRow::Data { cells, .. } => cells.get(i),
                        BodyRow::Expansion { .. } => None,
                    })
                    .map(|cell| text_width(&cell.content))
                    .fold(text_width(&head.title), u16::max)
            });
            content.saturating_add(padding.saturating_mul(2))
        })
        .collect()
}

/// Indices of the columns that scroll horizontally (everything but the
/// fixed edges).
fn scrollable_range(columns: usize, fixed: FixedColumns) -> std::ops::Range<usize> {
    let start = usize::from(fixed.contains(FixedColumns::FIRST) && columns > 0);
    let end = if fixed.contains(FixedColumns::LAST) && columns > start {
        columns - 1
    } else {
        columns
    };
    start..end
}

/// Number of columns that take part in horizontal scrolling.
pub fn scrollable_column_count(view: &TableView) -> usize {
    scrollable_range(view.header.len(), view.fixed()).len()
}

fn layout_columns(view: &TableView, sheet: Option<&StyleSheet>, area: Rect, h_offset: usize) -> Geometry {
    let padding = view.size().cell_padding();
    let gutter = if view.expandable { GUTTER_WIDTH } else { 0 };
    let mut widths = column_widths(view, sheet, padding);

    let natural = widths
        .iter()
        .fold(gutter, |acc, w| acc.saturating_add(*w));
    if view.fill() && natural < area.width && !widths.is_empty() {
        let extra = area.width - natural;
        let n = widths.len() as u16;
        for (i, w) in widths.iter_mut().enumerate() {
            let share = extra / n + u16::from((i as u16) < extra % n);
            *w = w.saturating_add(share);
        }
    }
    let table_width = if view.fill() {
        area.width
    } else {
        natural.min(area.width)
    };

    let fixed = view.fixed();
    let scrollable = scrollable_range(widths.len(), fixed);
    let mut placed = Vec::with_capacity(widths.len());

    let left = area.x.saturating_add(gutter.min(table_width));
    let right = area.x.saturating_add(table_width);
    let mut x = left;

    if scrollable.start == 1 {
        let width = widths[0].min(right - x);
        placed.push(Placed {
            column: 0,
            x,
            width,
            fixed: true,
        });
        x += width;
    }

    let mut region_end = right;
    if scrollable.end < widths.len() {
        let last = widths.len() - 1;
        let width = widths[last].min(right - x);
        region_end = right - width;
        placed.push(Placed {
            column: last,
            x: region_end,
            width,
            fixed: true,
        });
    }

    let skip = h_offset.min(scrollable.len().saturating_sub(1));
    for column in scrollable.skip(skip) {
        if x >= region_end {
            break;
        }
        let width = widths[column].min(region_end - x);
        placed.push(Placed {
            column,
            x,
            width,
            fixed: false,
        });
        x += width;
    }

    Geometry {
        table_width,
        gutter,
        padding,
        placed,
    }
}

// ───────────────────────────────────────── hit testing ───────

/// What a screen position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    Header,
    /// A data row, by index in the input row set.
    Row(usize),
    /// The expanded detail of a row.
    Expansion(usize),
}

// ───────────────────────────────────────── widget ────────────

/// The table widget itself: created fresh each frame.
pub struct TableWidget<'a> {
    view: &'a TableView,
    block: Option<Block<'a>>,
    stylesheet: Option<&'a StyleSheet>,
    highlight: bool,
}

impl<'a> TableWidget<'a> {
    pub fn new(view: &'a TableView) -> Self {
        Self {
            view,
            block: None,
            stylesheet: None,
            highlight: true,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn stylesheet(mut self, sheet: &'a StyleSheet) -> Self {
        self.stylesheet = Some(sheet);
        self
    }

    /// Whether to highlight the selected row (on by default).
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    fn inner(&self, area: Rect) -> Rect {
        self.block.as_ref().map_or(area, |b| b.inner(area))
    }

    /// Map a screen position to the part of the table under it, using the
    /// same layout the last render used for `area` and `state`.
    pub fn hit_test(&self, area: Rect, state: &TableWidgetState, column: u16, row: u16) -> Option<TableHit> {
        let inner = self.inner(area);
        let geometry = layout_columns(self.view, self.stylesheet, inner, state.h_offset);
        let within_x = column >= inner.x && column < inner.x.saturating_add(geometry.table_width);
        if !within_x || row < inner.y || row >= inner.bottom() {
            return None;
        }

        let rel = row - inner.y;
        if rel == 0 {
            return Some(TableHit::Header);
        }
        if rel < HEADER_LINES {
            return None;
        }

        let line = state.offset + usize::from(rel - HEADER_LINES);
        body_lines(self.view).get(line).map(|l| match l.kind {
            LineKind::Data { .. } => TableHit::Row(l.index),
            LineKind::Detail { .. } => TableHit::Expansion(l.index),
        })
    }

    fn class_style(&self, class: Option<&str>) -> Style {
        self.stylesheet
            .and_then(|s| s.lookup(class))
            .map_or_else(Style::default, |c| c.style)
    }

    fn render_header(&self, geometry: &Geometry, inner: Rect, buf: &mut Buffer) {
        let y = inner.y;
        buf.set_style(Rect::new(inner.x, y, geometry.table_width, 1), Theme::header_style());

        for p in &geometry.placed {
            let head = &self.view.header[p.column];
            let style = Theme::header_style().patch(self.class_style(head.class_name.as_deref()));
            draw_cell(buf, p, y, &head.title, geometry.padding, style);
        }

        if inner.height > 1 {
            let rule = "─".repeat(usize::from(geometry.table_width));
            buf.set_stringn(
                inner.x,
                y + 1,
                rule,
                usize::from(geometry.table_width),
                Theme::separator_style(),
            );
        }
    }
}

/// Draw `text` inside a placed column, padded and clipped.
fn draw_cell(buf: &mut Buffer, p: &Placed, y: u16, text: &str, padding: u16, style: Style) {
    if p.width == 0 {
        return;
    }
    buf.set_style(Rect::new(p.x, y, p.width, 1), style);
    let room = p.width.saturating_sub(padding.saturating_mul(2));
    if room == 0 {
        return;
    }
    buf.set_stringn(p.x + padding, y, text, usize::from(room), style);
}

impl<'a> StatefulWidget for TableWidget<'a> {
    type State = TableWidgetState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Resolve the inner area (inside the optional block border).
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        state.h_offset = state
            .h_offset
            .min(scrollable_column_count(self.view).saturating_sub(1));
        let geometry = layout_columns(self.view, self.stylesheet, inner, state.h_offset);
        self.render_header(&geometry, inner, buf);

        let body_height = inner.height.saturating_sub(HEADER_LINES);
        let lines = body_lines(self.view);
        state.clamp_scroll(&lines, usize::from(body_height));

        let fixed_style = if self.view.has_class(TableClass::FixedContainer) {
            Theme::fixed_column_style()
        } else {
            Style::default()
        };

        let visible = lines
            .iter()
            .skip(state.offset)
            .take(usize::from(body_height));

        for (i, line) in visible.enumerate() {
            let y = inner.y + HEADER_LINES + i as u16;
            let selected = self.highlight && line.index == state.selected;
            let row_area = Rect::new(inner.x, y, geometry.table_width, 1);

            match line.kind {
                LineKind::Data { cells, expanded } => {
                    let base = if selected {
                        Theme::container_style().patch(Theme::selected_style())
                    } else {
                        Theme::container_style()
                    };
                    buf.set_style(row_area, base);

                    if geometry.gutter > 0 && geometry.table_width >= geometry.gutter {
                        let icon = if expanded { "▼" } else { "▶" };
                        buf.set_stringn(
                            inner.x,
                            y,
                            icon,
                            usize::from(geometry.gutter),
                            base.patch(Theme::gutter_style()),
                        );
                    }

                    for p in &geometry.placed {
                        let Some(cell) = cells.get(p.column) else {
                            continue;
                        };
                        let mut style = Theme::container_style();
                        if p.fixed {
                            style = style.patch(fixed_style);
                        }
                        style = style.patch(self.class_style(cell.class_name.as_deref()));
                        if selected {
                            style = style.patch(Theme::selected_style());
                        }
                        draw_cell(buf, p, y, &cell.content, geometry.padding, style);
                    }
                }
                LineKind::Detail { text } => {
                    let base = Theme::container_style().patch(Theme::expansion_style());
                    buf.set_style(row_area, base);
                    let indent = geometry.gutter.saturating_add(geometry.padding);
                    let room = geometry.table_width.saturating_sub(indent);
                    if room > 0 {
                        buf.set_stringn(inner.x + indent, y, text, usize::from(room), base);
                    }
                }
            }
        }
    }
}
