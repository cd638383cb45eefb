//! `tracing` subscriber that prints to the browser devtools console.
//!
//! Each formatted event is buffered and handed to `console.log` / `console.warn` /
//! `console.error` in one call when the writer is dropped, so multi-part writes
//! from the fmt layer end up on a single console line.

use std::io;
use std::str::FromStr;
use std::sync::Once;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the console subscriber. Later calls are ignored.
pub fn init(level: Level) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(ConsoleMakeWriter)
            .with_max_level(level)
            .without_time()
            .with_ansi(false)
            .with_target(false)
            .finish();
        // Another subscriber may already be set by an embedding page.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Parse a level name ("trace".."error"), falling back to `INFO`.
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::INFO)
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::with_capacity(128) }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let msg = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&msg),
            Level::WARN => web_sys::console::warn_1(&msg),
            Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&msg),
            _ => web_sys::console::log_1(&msg),
        }
    }
}
