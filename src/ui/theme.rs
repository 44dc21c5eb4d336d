//! Colour palette, shared style utilities, and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

// ───────────────────────────────────────── utilities ─────────

/// Background tones shared by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Weak,
    Strong,
}

impl Background {
    pub fn style(self) -> Style {
        match self {
            Background::Weak => Style::default().bg(Color::Rgb(38, 38, 46)),
            Background::Strong => Style::default().bg(Color::Rgb(24, 24, 30)),
        }
    }
}

/// Border tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Weak,
    Strong,
}

impl Border {
    pub fn style(self) -> Style {
        match self {
            Border::Weak => Style::default().fg(Color::DarkGray),
            Border::Strong => Style::default().fg(Color::Gray),
        }
    }
}

/// Text weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWeight {
    Normal,
    Strong,
}

impl TextWeight {
    pub fn style(self) -> Style {
        match self {
            TextWeight::Normal => Style::default().fg(Color::White),
            TextWeight::Strong => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        }
    }
}

// ───────────────────────────────────────── theme ─────────────

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── table ──────────────────────────────────────────────────
    /// Header cells: weak border, weak background, strong text.
    pub fn header_style() -> Style {
        Border::Weak
            .style()
            .patch(Background::Weak.style())
            .patch(TextWeight::Strong.style())
    }

    pub fn separator_style() -> Style {
        Border::Weak.style().patch(Background::Strong.style())
    }

    pub fn container_style() -> Style {
        Background::Strong.style().patch(TextWeight::Normal.style())
    }

    pub fn selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn expansion_style() -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn gutter_style() -> Style {
        Style::default().fg(Color::Cyan)
    }

    /// Fixed columns get a slightly lifted background so they read as
    /// stationary while the rest scrolls.
    pub fn fixed_column_style() -> Style {
        Background::Weak.style()
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Border::Strong.style()
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn hint_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn key_style() -> Style {
        Style::default().fg(Color::Yellow)
    }
}

/// Parse a colour name as used in the config file (`cyan`, `dark_gray`,
/// `#ff8800`, ...).
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    let color = match s.replace(['-', ' '], "_").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" => Color::DarkGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}
