//! Logging setup and TUI startup/teardown.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use restdeck_api::HttpCollectionClient;
use restdeck_core::CollectionClient;

use crate::cli::Cli;
use crate::config::{self, Config};
use crate::ui::TuiApp;
use crate::ui::event_source::CrosstermEventSource;
use crate::ui::theme::Theme;

/// Runs the application: load config, set up logging, start the TUI.
///
/// # Errors
/// Returns an error if logging or terminal setup fails, or if the event
/// loop fails.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref());

    let deck_dir = config::deck_folder().context("could not resolve a home directory")?;
    std::fs::create_dir_all(&deck_dir)?;
    init_tui_logging(&deck_dir)?;

    let base_url = cli.base_url.unwrap_or(config.base_url);
    tracing::info!("starting restdeck against {base_url}");
    let client: Arc<dyn CollectionClient> = Arc::new(HttpCollectionClient::new(base_url));

    run_tui(client, config.theme).await
}

/// Initializes tracing to a file: the TUI owns the terminal, so logs never
/// go to stdout. The previous session's log is replaced.
///
/// # Errors
/// Returns an error if the log file cannot be prepared.
fn init_tui_logging(deck_dir: &Path) -> Result<()> {
    let debug_log = deck_dir.join("debug.log");
    if debug_log.exists() {
        std::fs::remove_file(&debug_log)?;
    }
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&debug_log)?;

    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "restdeck_cli=info,restdeck_view=info,restdeck_api=info".into()
        }))
        .with(
            fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .init();
    Ok(())
}

/// Puts the terminal into raw/alternate-screen mode, runs the app, and
/// restores the terminal whatever the outcome of the event loop.
async fn run_tui(client: Arc<dyn CollectionClient>, theme: Theme) -> Result<()> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = TuiApp::new(terminal, Box::new(CrosstermEventSource), client, theme);
    let result = app.run().await;

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result.map_err(Into::into)
}
