//! Popup overlay listing the key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use tabula::ui::Theme;

/// One row of the help popup: what it does, and the keys that do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub label: String,
    pub keys: String,
}

/// Read-only key binding overlay.
pub struct HelpPopup<'a> {
    pub entries: &'a [HelpEntry],
    /// Extra line shown under the bindings (e.g. where the config lives).
    pub footer: Option<&'a str>,
}

impl<'a> Widget for HelpPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // entries + blank above + blank/hint below + border
        let extra = if self.footer.is_some() { 6 } else { 5 };
        let height = u16::try_from(self.entries.len()).unwrap_or(u16::MAX).saturating_add(extra);
        let popup = centered_fixed(52, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Controls ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for entry in self.entries {
            // Fixed-width columns: label left-aligned, keys right-aligned.
            let label_col = format!("   {:<22}", entry.label);
            let keys_width = usize::from(inner.width)
                .saturating_sub(label_col.chars().count())
                .max(1);
            let keys_col = format!("{:>keys_width$}", entry.keys);
            lines.push(Line::from(vec![
                Span::styled(label_col, Style::default().fg(Color::White)),
                Span::styled(keys_col, Theme::key_style()),
            ]));
        }

        lines.push(Line::raw(""));
        if let Some(footer) = self.footer {
            lines.push(Line::from(Span::styled(format!("  {footer}"), Theme::hint_style())));
        }
        lines.push(Line::from(Span::styled("  Esc/?: close", Theme::hint_style())));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
