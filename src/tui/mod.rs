//! slope.ski Terminal User Interface
//!
//! Terminal interface for the slope.ski DEX: the swap form, the pool
//! listing, and the farm listing, fed by the pools/gauges API.

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod components;
#[cfg(feature = "tui")]
pub mod events;
#[cfg(feature = "tui")]
pub mod screens;
#[cfg(feature = "tui")]
pub mod ui;
#[cfg(feature = "tui")]
pub mod utils;

#[cfg(all(feature = "tui", test))]
mod tests;

#[cfg(feature = "tui")]
pub use app::{App, NavigationMode, Screen};
#[cfg(feature = "tui")]
pub use events::{Event, EventHandler};
#[cfg(feature = "tui")]
pub use ui::render_ui;

#[cfg(feature = "tui")]
use crate::config::SlopeNetworkConfig;
#[cfg(feature = "tui")]
use crate::{Error, SlopeClient};
#[cfg(feature = "tui")]
use crate::tui::utils::logger::FileLogger;
#[cfg(feature = "tui")]
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
#[cfg(feature = "tui")]
use ratatui::{backend::CrosstermBackend, Terminal};
#[cfg(feature = "tui")]
use std::io::{self, Stdout};
#[cfg(feature = "tui")]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "tui")]
use std::time::Duration;
#[cfg(feature = "tui")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "tui")]
pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Global flag to track if terminal cleanup is needed
#[cfg(feature = "tui")]
static TERMINAL_NEEDS_CLEANUP: AtomicBool = AtomicBool::new(false);

/// Initialize the terminal for TUI mode
///
/// Sets up the terminal with alternate screen and raw mode for TUI
/// interaction. Automatically tracks that cleanup will be needed.
#[cfg(feature = "tui")]
pub fn init_terminal() -> Result<TuiTerminal, Error> {
    enable_raw_mode().map_err(Error::Io)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(Error::Io)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(Error::Io)?;

    // Hide cursor for a cleaner interface
    terminal.hide_cursor().map_err(Error::Io)?;

    // Mark that terminal cleanup will be needed
    TERMINAL_NEEDS_CLEANUP.store(true, Ordering::SeqCst);

    Ok(terminal)
}

/// Restore the terminal to normal mode
///
/// Disables raw mode, leaves alternate screen, and shows cursor.
/// Safe to call multiple times.
#[cfg(feature = "tui")]
pub fn restore_terminal(terminal: &mut TuiTerminal) -> Result<(), Error> {
    // Only restore if cleanup is needed
    if TERMINAL_NEEDS_CLEANUP.load(Ordering::SeqCst) {
        disable_raw_mode().map_err(Error::Io)?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(Error::Io)?;
        terminal.show_cursor().map_err(Error::Io)?;
        TERMINAL_NEEDS_CLEANUP.store(false, Ordering::SeqCst);
    }
    Ok(())
}

/// Run the TUI until the user quits.
///
/// Fetches pools and gauges once before the first draw, then again on
/// every F5 press and on the periodic refresh tick.
#[cfg(feature = "tui")]
pub async fn run_tui(config: SlopeNetworkConfig, refresh_interval: Duration) -> Result<(), Error> {
    let client = SlopeClient::new(config)?;
    let mut app = App::new(client);
    let logger = FileLogger::new();
    logger.log_info("starting slope.ski TUI");

    let mut terminal = init_terminal()?;
    let mut events = EventHandler::new();

    // Background ticker that requests periodic data refreshes
    let shutdown = CancellationToken::new();
    let ticker_shutdown = shutdown.clone();
    let ticker_sender = events.sender();
    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        // The initial load happens before the first draw
        interval.tick().await;
        loop {
            tokio::select! {
                _ = ticker_shutdown.cancelled() => break,
                _ = interval.tick() => {
                    if ticker_sender.send(Event::Refresh).is_err() {
                        break;
                    }
                }
            }
        }
    });

    // Initial data load before the first draw
    if let Err(e) = app.refresh().await {
        logger.log_error(&format!("initial data load failed: {}", e));
        app.set_status(format!("Failed to load pools: {}", e));
    }

    let result = run_app(&mut terminal, &mut app, &mut events, &logger).await;

    shutdown.cancel();
    ticker.abort();
    restore_terminal(&mut terminal)?;
    logger.log_info("slope.ski TUI stopped");

    result
}

#[cfg(feature = "tui")]
async fn run_app(
    terminal: &mut TuiTerminal,
    app: &mut App,
    events: &mut EventHandler,
    logger: &FileLogger,
) -> Result<(), Error> {
    while app.running {
        terminal.draw(|frame| render_ui(frame, app))?;

        match events.next().await {
            Ok(Event::Refresh) => {
                if let Err(e) = app.refresh().await {
                    logger.log_error(&format!("data refresh failed: {}", e));
                    app.set_status(format!("Refresh failed: {}", e));
                }
            }
            Ok(event) => app.handle_event(event),
            Err(_) => break,
        }
    }

    Ok(())
}
