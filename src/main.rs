//! Company Form - terminal form for capturing a company profile
//!
//! A Ratatui-based form with cascading selections (company type, flow,
//! auto-response) and inline validation. Validated profiles are handed to a
//! submission handler.

mod app;
mod config;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use config::FormConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use submission::LogSubmissionHandler;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match FormConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (FormConfig::default(), Some(err)),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(err) = config_error {
        tracing::warn!("Ignoring unreadable config: {err:#}");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let print_on_exit = config.print_submissions_on_exit();
    let mut app = App::new(Box::new(LogSubmissionHandler::new()), config);
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

    if print_on_exit {
        for submission in &app.state.submissions {
            println!("{}", serde_json::to_string(&submission.profile)?);
        }
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events reported on some platforms
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        if app.should_quit() {
            tracing::info!(
                submitted = app.state.submissions.len(),
                "closing company form"
            );
            return Ok(());
        }
    }
}
