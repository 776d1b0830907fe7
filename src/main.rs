// paperdeck: terminal explainer for AI research papers.
// Sets up logging and the terminal, then hands control to the app loop.

mod app;
mod cli;
mod config;
mod content;
mod diagrams;
mod error;
mod state;
mod ui;

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::App;
use crate::cli::Cli;
use crate::config::{Settings, paths};
use crate::content::Catalog;
use crate::error::{DeckError, Result};

/// Route log output to a file; the terminal belongs to the UI.
fn init_logging(level: &str) {
    let Some(path) = paths::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = File::create(&path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn settings_path(cli: &Cli) -> Result<PathBuf> {
    cli.config
        .clone()
        .or_else(paths::settings_path)
        .ok_or_else(|| DeckError::Config("could not determine the config directory".to_string()))
}

fn print_catalog(catalog: &Catalog) {
    for paper in catalog.papers() {
        let marker = if paper.has_slides() { " [slides]" } else { "" };
        println!(
            "{:<14} {:<10} {}{}",
            paper.id,
            paper.date_label(),
            paper.title,
            marker
        );
    }
}

fn init_config(path: &Path) -> Result<()> {
    config::save(path, &Settings::default())?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = settings_path(&cli)?;

    if cli.init_config {
        return init_config(&path);
    }

    let settings = config::load(&path)?;
    init_logging(&settings.log_level);
    log::info!("Loaded settings from {}", path.display());

    let catalog = Catalog::builtin()?;
    if cli.list {
        print_catalog(&catalog);
        return Ok(());
    }

    // Resolve the startup page before touching the terminal
    let start = cli.paper.clone().or_else(|| settings.start_paper.clone());
    let mut app = App::new(catalog, settings);
    if let Some(id) = &start {
        app.open_paper(id)?;
        if cli.slides {
            app.open_slides();
        }
    } else if cli.slides {
        log::warn!("--slides given without a paper; ignoring");
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = app.run(&mut terminal).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("App loop failed: {}", e);
    }
    result
}
