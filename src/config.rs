//! User configuration: keybindings, table defaults, column stylesheet, and
//! persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/tabula/config.toml` (default `~/.config/tabula/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tabula::core::{FixedColumns, TableSize};
use tabula::ui::stylesheet::parse_bool;
use tabula::ui::{ClassStyle, StyleSheet};
use tabula::Error;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    ToggleRow,
    ScrollLeft,
    ScrollRight,
    CycleSize,
    CycleFixed,
    ToggleFill,
    CollapseAll,
    SaveSettings,
    ShowHelp,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the help popup).
    pub const ALL: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::ToggleRow,
        Action::ScrollLeft,
        Action::ScrollRight,
        Action::CycleSize,
        Action::CycleFixed,
        Action::ToggleFill,
        Action::CollapseAll,
        Action::SaveSettings,
        Action::ShowHelp,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::MoveUp => "Move Up",
            Action::MoveDown => "Move Down",
            Action::ToggleRow => "Expand / Collapse Row",
            Action::ScrollLeft => "Scroll Left",
            Action::ScrollRight => "Scroll Right",
            Action::CycleSize => "Cycle Size",
            Action::CycleFixed => "Cycle Fixed Columns",
            Action::ToggleFill => "Toggle Fill Width",
            Action::CollapseAll => "Collapse All",
            Action::SaveSettings => "Save Table Settings",
            Action::ShowHelp => "Show Controls",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::ToggleRow => "toggle_row",
            Action::ScrollLeft => "scroll_left",
            Action::ScrollRight => "scroll_right",
            Action::CycleSize => "cycle_size",
            Action::CycleFixed => "cycle_fixed",
            Action::ToggleFill => "toggle_fill",
            Action::CollapseAll => "collapse_all",
            Action::SaveSettings => "save_settings",
            Action::ShowHelp => "show_help",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared, and SHIFT is ignored for characters (terminals report
    /// `?` as `Shift+?`).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mut mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        if matches!(self.code, KeyCode::Char(_)) {
            mask.remove(KeyModifiers::SHIFT);
        }
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    fn modifier_prefix(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s
    }

    /// User-friendly display string (e.g. `"Alt+↑"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Backspace => "Bksp".into(),
            KeyCode::Delete => "Del".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            _ => key_name(self.code),
        };
        format!("{}{key}", self.modifier_prefix())
    }

    /// Serialise to config-file format (e.g. `"Alt+Up"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        format!("{}{}", self.modifier_prefix(), key_name(self.code))
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            // Keep the original case for single characters (`?`, `F`).
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        // Terminals report shifted characters as the shifted glyph, so
        // `Shift+x` is stored as `X`.
        if let KeyCode::Char(c) = code {
            if modifiers.contains(KeyModifiers::SHIFT) {
                modifiers.remove(KeyModifiers::SHIFT);
                let upper = c.to_uppercase().next().unwrap_or(c);
                return Some(KeyBind::new(KeyCode::Char(upper), modifiers));
            }
        }

        Some(KeyBind { code, modifiers })
    }
}

/// Canonical config-file name of a key code.
fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Delete => "Delete".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PageUp".into(),
        KeyCode::PageDown => "PageDown".into(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration: keybindings and table defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub size: TableSize,
    pub fixed: FixedColumns,
    pub fill: bool,
    /// Column classes (`class.<name>.<property>` entries).
    pub stylesheet: StyleSheet,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            size: TableSize::default(),
            fixed: FixedColumns::FIRST,
            fill: false,
            stylesheet: Self::default_stylesheet(),
        }
    }
}

impl AppConfig {
    /// Hard-coded default keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(ToggleRow, vec![KeyBind::new(Enter, n), KeyBind::new(Char(' '), n)]);
        m.insert(ScrollLeft, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(ScrollRight, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(CycleSize, vec![KeyBind::new(Char('s'), n)]);
        m.insert(CycleFixed, vec![KeyBind::new(Char('f'), n)]);
        m.insert(ToggleFill, vec![KeyBind::new(Char('w'), n)]);
        m.insert(CollapseAll, vec![KeyBind::new(Char('c'), n)]);
        m.insert(SaveSettings, vec![KeyBind::new(Char('S'), n)]);
        m.insert(ShowHelp, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Widths for the gallery's built-in column classes.
    pub fn default_stylesheet() -> StyleSheet {
        let mut sheet = StyleSheet::new();
        for (name, width) in [("isbn", 17), ("title", 28), ("author", 20)] {
            sheet.insert(
                name,
                ClassStyle {
                    width: Some(width),
                    ..ClassStyle::default()
                },
            );
        }
        sheet
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Add a binding for `action`.  Removes this key from any other action
    /// to prevent conflicts, then appends it to `action`'s bindings.
    pub fn add_binding(&mut self, action: Action, bind: KeyBind) {
        for binds in self.bindings.values_mut() {
            binds.retain(|b| b != &bind);
        }
        self.bindings.entry(action).or_default().push(bind);
    }

    /// Format the binding list for a given action (e.g. `"↑/k"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(KeyBind::display).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: navigate | {}: expand | {}: scroll | {}: controls | {}: quit",
            self.short_binding(Action::MoveUp),
            self.short_binding(Action::ToggleRow),
            self.short_binding(Action::ScrollRight),
            self.short_binding(Action::ShowHelp),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default location, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring config: {e}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> tabula::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse_config(&contents))
    }

    /// Persist current config to the default location.
    pub fn save(&self) -> tabula::Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> tabula::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        std::fs::write(path, self.serialise()).map_err(|e| Error::io(path, e))
    }

    /// Parse the config text.  Bad lines are logged and skipped.
    pub fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for (i, line) in s.lines().enumerate() {
            if let Err(e) = config.apply_line(i + 1, line) {
                tracing::warn!("config: {e}");
            }
        }

        config
    }

    fn apply_line(&mut self, line_no: usize, line: &str) -> tabula::Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
            return Ok(());
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::parse(line_no, format!("expected `key = value`, got `{line}`")));
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        match key {
            "size" => {
                self.size = TableSize::parse(value)
                    .ok_or_else(|| Error::parse(line_no, format!("unknown size `{value}`")))?;
                return Ok(());
            }
            "fixed" => {
                self.fixed = FixedColumns::parse(value)
                    .ok_or_else(|| Error::parse(line_no, format!("unknown fixed columns `{value}`")))?;
                return Ok(());
            }
            "fill" => {
                self.fill = parse_bool(value).map_err(|e| Error::parse(line_no, e))?;
                return Ok(());
            }
            _ => {}
        }

        if let Some(rest) = key.strip_prefix("class.") {
            let Some((name, property)) = rest.rsplit_once('.') else {
                return Err(Error::parse(line_no, format!("expected `class.<name>.<property>`, got `{key}`")));
            };
            return self
                .stylesheet
                .apply(name, property, value)
                .map_err(|e| Error::parse(line_no, e));
        }

        // Unknown keys are ignored so older binaries tolerate newer files.
        let Some(action) = Action::from_config_key(key) else {
            return Ok(());
        };

        let parsed: Vec<KeyBind> = value
            .split(',')
            .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
            .collect();
        if parsed.is_empty() {
            return Err(Error::parse(line_no, format!("no valid keys for `{key}`")));
        }
        self.bindings.insert(action, Vec::new());
        for bind in parsed {
            self.add_binding(action, bind);
        }
        Ok(())
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# tabula configuration".to_string(),
            String::new(),
            "# Table defaults".to_string(),
            format!("size = {}", self.size),
            format!("fixed = {}", self.fixed),
            format!("fill = {}", self.fill),
            String::new(),
            "# Column classes: class.<name>.<width|fg|bg|bold|italic> = value".to_string(),
        ];

        for (name, class) in self.stylesheet.iter() {
            if let Some(width) = class.width {
                lines.push(format!("class.{name}.width = {width}"));
            }
            if let Some(fg) = class.style.fg {
                lines.push(format!("class.{name}.fg = {}", color_name(fg)));
            }
            if let Some(bg) = class.style.bg {
                lines.push(format!("class.{name}.bg = {}", color_name(bg)));
            }
            if class.style.add_modifier.contains(ratatui::style::Modifier::BOLD) {
                lines.push(format!("class.{name}.bold = true"));
            }
            if class.style.add_modifier.contains(ratatui::style::Modifier::ITALIC) {
                lines.push(format!("class.{name}.italic = true"));
            }
        }

        lines.extend([
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ]);

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(KeyBind::to_config_string).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Config-file spelling of a colour (inverse of `theme::parse_color`).
fn color_name(color: ratatui::style::Color) -> String {
    use ratatui::style::Color;
    match color {
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        Color::DarkGray => "dark_gray".into(),
        Color::LightRed => "light_red".into(),
        Color::LightGreen => "light_green".into(),
        Color::LightYellow => "light_yellow".into(),
        Color::LightBlue => "light_blue".into(),
        Color::LightMagenta => "light_magenta".into(),
        Color::LightCyan => "light_cyan".into(),
        other => format!("{other:?}").to_lowercase(),
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/tabula/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("tabula").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parses_key_strings() {
        assert_eq!(
            KeyBind::parse("Ctrl+c"),
            Some(KeyBind::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        );
        assert_eq!(KeyBind::parse("Alt+Up"), Some(KeyBind::new(KeyCode::Up, KeyModifiers::ALT)));
        assert_eq!(KeyBind::parse("?"), Some(KeyBind::new(KeyCode::Char('?'), KeyModifiers::NONE)));
        assert_eq!(KeyBind::parse("F5"), Some(KeyBind::new(KeyCode::F(5), KeyModifiers::NONE)));
        assert_eq!(KeyBind::parse("Hyper+x"), None);
        assert_eq!(KeyBind::parse("Shift+x"), Some(KeyBind::new(KeyCode::Char('X'), KeyModifiers::NONE)));
        assert_eq!(
            KeyBind::parse("Ctrl+Shift+s"),
            Some(KeyBind::new(KeyCode::Char('S'), KeyModifiers::CONTROL))
        );
        assert_eq!(KeyBind::parse("Shift+Up"), Some(KeyBind::new(KeyCode::Up, KeyModifiers::SHIFT)));
        assert_eq!(KeyBind::parse("nonsense"), None);
    }

    #[test]
    fn default_bindings_match() {
        let config = AppConfig::default();
        assert_eq!(
            config.match_key(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::MoveDown)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::ToggleRow)
        );
        assert_eq!(config.match_key(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn add_binding_steals_key_from_other_action() {
        let mut config = AppConfig::default();
        config.add_binding(Action::Quit, KeyBind::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(
            config.match_key(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(config.display_bindings(Action::MoveDown), "↓");
    }

    #[test]
    fn config_bindings_steal_keys_too() {
        let config = AppConfig::parse_config("quit = j, q\n");
        assert_eq!(config.display_bindings(Action::Quit), "j/q");
        assert_eq!(config.display_bindings(Action::MoveDown), "↓");
    }

    #[test]
    fn parses_table_defaults_and_classes() {
        let config = AppConfig::parse_config(
            "# comment\n\
             size = large\n\
             fixed = first|last\n\
             fill = true\n\
             class.title.width = 30\n\
             class.title.fg = cyan\n\
             quit = Ctrl+q, Esc\n",
        );
        assert_eq!(config.size, TableSize::Large);
        assert_eq!(config.fixed, FixedColumns::BOTH);
        assert!(config.fill);
        let title = config.stylesheet.get("title").unwrap();
        assert_eq!(title.width, Some(30));
        assert_eq!(title.style.fg, Some(Color::Cyan));
        assert_eq!(config.display_bindings(Action::Quit), "Ctrl+q/Esc");
    }

    #[test]
    fn bad_lines_fall_back_to_defaults() {
        let config = AppConfig::parse_config("size = gigantic\nfixed = middle\nnot a pair\nquit = Hyper+q\n");
        assert_eq!(config.size, TableSize::Medium);
        assert_eq!(config.fixed, FixedColumns::FIRST);
        assert_eq!(config.display_bindings(Action::Quit), "q");
    }

    #[test]
    fn fill_accepts_only_true_or_false() {
        let mut config = AppConfig::default();
        config.fill = true;
        let err = config.apply_line(3, "fill = yes").unwrap_err();
        assert_eq!(err.to_string(), "line 3: expected true/false, got `yes`");
        assert!(config.fill);

        let config = AppConfig::parse_config("fill = true\nfill = on\n");
        assert!(config.fill);
        let config = AppConfig::parse_config("fill = 1\n");
        assert!(!config.fill);
    }

    #[test]
    fn shifted_letter_binding_fires_on_uppercase() {
        let config = AppConfig::parse_config("collapse_all = Shift+x\n");
        assert_eq!(
            config.match_key(key(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Some(Action::CollapseAll)
        );
        assert_eq!(config.match_key(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn apply_line_reports_line_numbers() {
        let mut config = AppConfig::default();
        let err = config.apply_line(7, "size = gigantic").unwrap_err();
        assert_eq!(err.to_string(), "line 7: unknown size `gigantic`");
    }

    #[test]
    fn serialise_round_trips() {
        let mut config = AppConfig::default();
        config.size = TableSize::Small;
        config.fixed = FixedColumns::LAST;
        config.fill = true;
        config.stylesheet.apply("year", "fg", "#ff8800").unwrap();
        config.stylesheet.apply("year", "bold", "true").unwrap();
        config.add_binding(Action::ShowHelp, KeyBind::new(KeyCode::F(1), KeyModifiers::NONE));

        let parsed = AppConfig::parse_config(&config.serialise());
        assert_eq!(parsed.size, config.size);
        assert_eq!(parsed.fixed, config.fixed);
        assert_eq!(parsed.fill, config.fill);
        assert_eq!(parsed.stylesheet, config.stylesheet);
        for &action in Action::ALL {
            assert_eq!(parsed.bindings.get(&action), config.bindings.get(&action), "{action:?}");
        }
    }

    #[test]
    fn save_to_and_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("tabula-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.size = TableSize::Large;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.size, TableSize::Large);
        std::fs::remove_dir_all(&dir).unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with(&path.display().to_string()));
    }
}
