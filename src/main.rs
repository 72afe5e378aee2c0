mod app;
mod config;
mod domain;
mod input;
mod logging;
mod notifications;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::Parser;
use config::{Cli, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli).context("invalid configuration")?;

    let _guard = logging::init_tracing(&config)?;
    info!(
        unit_secs = config.unit_secs,
        tick_ms = config.tick_rate.as_millis() as u64,
        auto_start = config.auto_start,
        "pomorks starting"
    );

    run_tui(&config)
}

fn run_tui(config: &Config) -> Result<()> {
    let mut app = AppState::new(config);

    // Setup terminal
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = &result {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    info!(
        work_cycles = app.work_cycles_today(),
        tasks = app.tasks.len(),
        "pomorks exiting"
    );
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &Config,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app, Instant::now()))?;

        // Wait for input, at most until the next tick is due
        let timeout = ticker::poll_timeout(config.tick_rate, last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Tick the countdown
        if last_tick.elapsed() >= config.tick_rate {
            app.tick(Instant::now());
            last_tick = Instant::now();
        }
    }
}
