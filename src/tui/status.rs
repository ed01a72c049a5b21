//! Feed for the status bar: warnings and errors, one short line each.
//!
//! The full log goes to the rolling file. The status bar only needs the things a user
//! should notice, such as an input that did not parse.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Hands out one [`StatusLine`] per formatted event.
#[derive(Clone, Debug)]
pub struct StatusWriter {
    tx: Sender<String>,
}

pub fn channel() -> (StatusWriter, Receiver<String>) {
    let (tx, rx) = mpsc::channel();
    (StatusWriter { tx }, rx)
}

/// Collects one event and sends it on drop, with line breaks folded into spaces.
pub struct StatusLine {
    buf: Vec<u8>,
    tx: Sender<String>,
}

impl<'a> MakeWriter<'a> for StatusWriter {
    type Writer = StatusLine;

    fn make_writer(&'a self) -> Self::Writer {
        StatusLine {
            buf: Vec::new(),
            tx: self.tx.clone(),
        }
    }
}

impl Write for StatusLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for StatusLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !line.is_empty() {
            let _ = self.tx.send(line);
        }
    }
}

/// A compact WARN+ layer: level and message only.
pub fn status_layer<S>(writer: StatusWriter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .with_filter(LevelFilter::WARN)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/status.rs"]
mod tests;
