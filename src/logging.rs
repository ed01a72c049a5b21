use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use dragnum::tui::status;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "dragnum.log";
const DEFAULT_FILTER: &str = "dragnum=info";

/// Keeps the file writer flushing until the app exits.
pub struct LoggingGuard {
    _file: WorkerGuard,
    log_dir: PathBuf,
    status_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn take_status_rx(&mut self) -> Option<Receiver<String>> {
        self.status_rx.take()
    }
}

/// Per-user log directory, or one under the temp dir when the cache dir is unusable.
fn log_dir() -> Option<PathBuf> {
    if let Ok(dir) = dragnum::services::ensure_log_dir() {
        return Some(dir);
    }
    let dir = std::env::temp_dir().join("dragnum").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Everything `RUST_LOG` allows goes to a daily file; warnings also go to the status bar.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir()?;
    let (file, file_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE));
    let (status_writer, status_rx) = status::channel();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(status::status_layer(status_writer))
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| tracing::error!("{info}")));

    tracing::info!(log_dir = %log_dir.display(), "logging started");
    Some(LoggingGuard {
        _file: file_guard,
        log_dir,
        status_rx: Some(status_rx),
    })
}
