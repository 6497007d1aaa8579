mod app;
mod domain;
mod input;
mod persistence;
mod store;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use store::TodoStore;

#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "A tidy terminal to-do list with filters and local persistence", long_about = None)]
struct Cli {
    /// Directory holding the task store. Defaults to a .slate directory
    /// found by walking up from the current directory, or ~/.slate.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve where the task store lives
    let store_path = match cli.data_dir {
        Some(dir) => persistence::tasks_file_in(dir)?,
        None => persistence::tasks_file()?,
    };

    run_tui(store_path)
}

fn run_tui(store_path: PathBuf) -> Result<()> {
    // Show which store we're using
    eprintln!("Using task store: {}", store_path.display());

    // Load tasks; an unreadable store becomes a warning banner, not a crash
    let (store, warning) = TodoStore::load(store_path);
    let mut app = AppState::new(store, warning);

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
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Expire the notice banner and fading rows
        app.tick();
    }
}
