use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use architect_tui::app::App;
use architect_tui::clipboard::system_clipboard;
use architect_tui::config::TuiConfig;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

fn main() -> Result<()> {
    let config = TuiConfig::parse();
    init_logging(&config)?;

    let preferences = config.preferences();
    info!(
        language = %preferences.language,
        review_mode = preferences.review_mode.as_str(),
        "prompt-architect starting"
    );

    let mut app = App::new(preferences, system_clipboard(config.no_clipboard));
    let result = run_tui(&mut app);

    if result.is_ok() {
        if config.print {
            print!("{}", app.prompt());
        }
        if config.dump_json {
            let json = serde_json::to_string_pretty(&app.view())
                .context("failed to serialize session view")?;
            println!("{json}");
        }
    }

    info!("prompt-architect exiting");
    result
}

/// Logs go to a file because the terminal belongs to the UI. No file, no subscriber.
fn init_logging(config: &TuiConfig) -> Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.wants_quit(key) {
                break;
            }
            app.handle_key(key);
        }
    }

    Ok(())
}
