//! Storefront - terminal catalog browser
//!
//! Fetches a product catalog once, then lets the user search, filter by
//! category, sort by price and page through product cards.

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use storefront::application::{App, AppMode};
use storefront::infrastructure::{telemetry, CatalogSource, FetchError, StorefrontConfig};
use storefront::presentation::{render_ui, InputHandler};

type CatalogResult = Result<String, FetchError>;

/// Entry point for the storefront browser.
///
/// Reads configuration, starts the one-time catalog fetch in the background,
/// sets up the terminal and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, if terminal setup fails
/// or if there are issues with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env();
    telemetry::init(config.log_file.as_deref())?;

    let catalog = spawn_fetch(config.catalog_source());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let res = run_app(&mut terminal, &mut app, &catalog);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

/// Fetches the catalog on a background thread, delivering the single result
/// over a channel.
fn spawn_fetch(source: Box<dyn CatalogSource>) -> Receiver<CatalogResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        tracing::info!(source = %source.describe(), "fetching products");
        // The receiver is gone only if the UI already exited.
        let _ = tx.send(source.fetch());
    });
    rx
}

/// Main application event loop.
///
/// Draws a frame, applies the catalog result once it arrives and dispatches
/// key presses. Continues until the user presses 'q' outside of text input.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    catalog: &Receiver<CatalogResult>,
) -> io::Result<()> {
    let mut fetching = true;
    loop {
        if fetching {
            match catalog.try_recv() {
                Ok(result) => {
                    app.set_catalog_result(result);
                    fetching = false;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    app.set_catalog_result(Err(FetchError::WorkerLost));
                    fetching = false;
                }
            }
        }

        terminal.draw(|f| render_ui(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
