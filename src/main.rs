mod app;
mod celebration;
mod config;
mod domain;
mod input;
mod logging;
mod notifications;
mod reminders;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use chrono::Local;
use clap::{ArgAction, Parser, Subcommand};
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "listo")]
#[command(
    about = "A terminal to-do list with categories, priorities, subtasks and reminders",
    long_about = None
)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Some(Commands::Init) => {
            config::init_config(&config_path)?;
            println!("Wrote default config: {}", config_path.display());
            Ok(())
        }
        None => {
            let config = Config::load(&config_path)?;
            logging::init_tracing(cli.verbose, &logging::default_log_path()?)?;
            run_tui(config)
        }
    }
}

fn run_tui(config: Config) -> Result<()> {
    info!(tick_ms = config.tick_ms, "starting listo");

    // Create app state
    let mut app = AppState::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = &result {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    info!(tasks = app.store.len(), "exiting");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick_rate = ticker::tick_duration(app.config.tick_ms);

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Tick animation, overdue flags and reminders
        app.tick(Local::now());
    }
}
