//! Interactive gallery for the `tabula` table widget.
//!
//! Run with no arguments to browse the built-in book catalog, or pass a TSV
//! file (`isbn  title  author  published  pages  synopsis`) to browse your own.

mod app;
mod catalog;
mod config;

use std::io::{self, stderr, Stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tabula::core::{FixedColumns, TableSize};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{AppState, TableSettings},
    view,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for TableSize {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Small => TableSize::Small,
            SizeArg::Medium => TableSize::Medium,
            SizeArg::Large => TableSize::Large,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FixedArg {
    None,
    First,
    Last,
    Both,
}

impl From<FixedArg> for FixedColumns {
    fn from(arg: FixedArg) -> Self {
        match arg {
            FixedArg::None => FixedColumns::NONE,
            FixedArg::First => FixedColumns::FIRST,
            FixedArg::Last => FixedColumns::LAST,
            FixedArg::Both => FixedColumns::FIRST | FixedColumns::LAST,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Browse tabular data in an interactive table")]
struct Cli {
    /// TSV file to display (defaults to a built-in book catalog).
    data: Option<PathBuf>,

    /// Cell size preset (overrides the config file).
    #[arg(long, value_enum)]
    size: Option<SizeArg>,

    /// Columns to keep fixed while scrolling horizontally.
    #[arg(long, value_enum)]
    fixed: Option<FixedArg>,

    /// Stretch the table to the full terminal width.
    #[arg(long)]
    fill: bool,

    /// Disable row expansion.
    #[arg(long = "no-expand")]
    no_expand: bool,
}

impl Cli {
    /// Merge CLI flags over the config defaults.
    fn settings(&self, config: &config::AppConfig) -> TableSettings {
        TableSettings {
            size: self.size.map_or(config.size, TableSize::from),
            fixed: self.fixed.map_or(config.fixed, FixedColumns::from),
            fill: self.fill || config.fill,
            expandable: !self.no_expand,
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (silent unless RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let (books, source) = match &cli.data {
        Some(path) => {
            let books = catalog::load_tsv(path)
                .with_context(|| format!("loading {}", path.display()))?;
            (books, path.display().to_string())
        }
        None => (catalog::sample(), "sample catalog".to_string()),
    };

    let user_config = config::AppConfig::load();
    let settings = cli.settings(&user_config);
    tracing::debug!(?settings, rows = books.len(), "starting gallery");
    let mut state = AppState::new(books, source, user_config, settings);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(100));

    // ── event loop ────────────────────────────────────────────
    let result = run(&mut terminal, &mut state, &mut events).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    state: &mut AppState,
    events: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| view::draw(frame, state))?;

        let Some(event) = events.recv().await else {
            return Ok(());
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(state, m),
            AppEvent::Resize(width, height) => tracing::debug!(width, height, "terminal resized"),
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config() {
        let config = config::AppConfig::default();
        let cli = Cli::parse_from(["tabula", "--size", "small", "--fixed", "both", "--fill"]);
        let settings = cli.settings(&config);
        assert_eq!(settings.size, TableSize::Small);
        assert_eq!(settings.fixed, FixedColumns::BOTH);
        assert!(settings.fill);
        assert!(settings.expandable);
    }

    #[test]
    fn config_applies_when_flags_absent() {
        let mut config = config::AppConfig::default();
        config.size = TableSize::Large;
        config.fixed = FixedColumns::LAST;
        let cli = Cli::parse_from(["tabula", "books.tsv", "--no-expand"]);
        let settings = cli.settings(&config);
        assert_eq!(cli.data, Some(PathBuf::from("books.tsv")));
        assert_eq!(settings.size, TableSize::Large);
        assert_eq!(settings.fixed, FixedColumns::LAST);
        assert!(!settings.fill);
        assert!(!settings.expandable);
    }
}
