use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use dragnum::services::load_settings;
use dragnum::tui::crossterm::into_terminal_event;
use dragnum::tui::terminal_guard::TerminalGuard;
use dragnum::tui::{AppError, DemoApp};

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), AppError> {
    let mut logging = logging::init();
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let settings = load_settings().inspect_err(|err| {
        tracing::error!(error = %err, "failed to load settings");
    })?;

    let mut app = DemoApp::new(&settings);
    if let Some(rx) = logging.as_mut().and_then(|g| g.take_status_rx()) {
        app = app.with_log_rx(rx);
    }

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signals =
        dragnum::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    while !app.should_quit() {
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "shutting down");
            break;
        }

        app.drain_logs();
        terminal.draw(|frame| app.render(frame))?;

        if crossterm::event::poll(POLL_INTERVAL)? {
            let event = into_terminal_event(crossterm::event::read()?);
            app.handle_input(&event);
        }
    }

    drop(terminal);
    drop(guard);
    for view in app.shutdown() {
        tracing::info!(field = view.name(), value = view.buffer(), "final value");
    }
    Ok(())
}
