//! shopping-tui — Terminal UI for keeping a shopping list.
//! Uses Ratatui + Crossterm for rendering.

mod app;
mod ui;

use std::io;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{info, warn};

use shopping_core::config::Config;

use app::App;

fn main() -> Result<()> {
    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let loaded = Config::load_from_dir(&project_root);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::from_env(),
    };

    init_tracing(&config.log_file);
    if let Err(e) = loaded {
        warn!("Ignoring shopping.yaml, using defaults: {e:#}");
    }

    // The list starts empty on every launch
    let mut app = App::new(config);
    info!("Starting shopping list TUI");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    io::stdout()
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    let result = Terminal::new(backend)
        .and_then(|mut terminal| run(&mut terminal, &mut app))
        .context("Terminal UI failed");

    // Cleanup
    disable_raw_mode().context("Failed to disable raw mode")?;
    io::stdout()
        .execute(LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;

    info!(items = app.screen.list().len(), "Shutting down");
    result
}

/// Log to a file (not stdout, since we own the terminal). Logging is skipped
/// when the file cannot be opened.
fn init_tracing(path: &str) {
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

/// Main event loop: draw, wait for a key, apply it.
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &*app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
