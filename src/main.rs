//! Journey TUI - lead intake for the M&P Expert journey form
//!
//! A Ratatui-based terminal client that collects a prospective client's
//! journey form and submits it to the lead-intake service.

mod app;
mod config;
mod controller;
mod error;
mod intake;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::JourneyConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journey_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = JourneyConfig::load()?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    if app.is_submitting() {
        tracing::info!("Quit while a submission was in flight; it has been abandoned");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up a finished submission before drawing
        app.poll_submission();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a submission is in flight (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if app.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Let the submission task make progress between polls
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
