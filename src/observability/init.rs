//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, wiring the fmt layer to the
//! rotating log file so both the plugin thread and the worker thread log to
//! one place.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `MakeWriter` adapter over the rotating [`FileWriter`].
///
/// The fmt layer asks for a fresh writer per event; each one shares the same
/// underlying rotating file through an `Arc`.
#[derive(Clone, Debug)]
struct MakeFileWriter {
    inner: Arc<FileWriter>,
}

/// Per-event writer handle produced by [`MakeFileWriter`].
struct LogWriter {
    inner: Arc<FileWriter>,
}

impl std::io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write_bytes(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        // write_bytes flushes eagerly.
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MakeFileWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Initializes the tracing subscriber with file-based log output.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters events based on the configured trace level
/// 2. Formats events with targets and field values
/// 3. Writes to a rotating file with backups
///
/// # Parameters
///
/// * `config` - Plugin configuration containing the `trace_level` option
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # File Location
///
/// Logs are written to: `~/.local/share/zellij/mealdeck/mealdeck.log`
///
/// The plugin sees `/host/.local/share/zellij/mealdeck/mealdeck.log` inside
/// Zellij's sandbox, which typically maps to the path above when Zellij is
/// started from the user's home directory.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if directory creation fails (observability is optional)
/// - Idempotent: safe to call multiple times (only first call takes effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_file = data_dir.join("mealdeck.log");
    let make_writer = MakeFileWriter {
        inner: Arc::new(FileWriter::new(log_file)),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
