use std::time::Duration;

use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend, backend::TestBackend};

use super::Result;
use super::terminal::{restore_terminal, setup_terminal};
use crate::events::handle_event;
use crate::state::AppState;
use crate::ui::ui;

/// How long the loop waits for input before ticking toasts.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What: Run the browser until the user quits.
///
/// Inputs:
/// - `app`: Session state built from the loaded catalog and settings
///
/// Output:
/// - `Ok(())` on a clean exit; `Err` on terminal I/O failures.
///
/// Details:
/// - Single-threaded: poll for input, mutate state, redraw.
/// - With `APPSTORE_TEST_HEADLESS=1` the terminal is never touched; one frame
///   is drawn into an off-screen buffer and the function returns.
/// - The terminal is restored even when the loop fails.
pub fn run(mut app: AppState) -> Result<()> {
    if crate::util::is_headless() {
        tracing::info!("headless mode; drawing a single off-screen frame");
        draw_once(&mut app, 100, 30)?;
        return Ok(());
    }

    setup_terminal()?;
    let outcome = event_loop(&mut app);
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    outcome
}

/// What: Render one frame of `app` into an in-memory backend.
///
/// Output:
/// - The rendered terminal, for inspection by callers and tests.
pub fn draw_once(app: &mut AppState, width: u16, height: u16) -> Result<Terminal<TestBackend>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| ui(f, app))?;
    Ok(terminal)
}

fn event_loop(app: &mut AppState) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    terminal.clear()?;
    loop {
        terminal.draw(|f| ui(f, app))?;
        if event::poll(POLL_INTERVAL)? {
            let ev = event::read()?;
            if handle_event(&ev, app) {
                tracing::info!("exit requested");
                break;
            }
        } else {
            app.tick();
        }
    }
    Ok(())
}
