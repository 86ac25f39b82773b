//! Structured logging with file-based output.
//!
//! This module provides the logging infrastructure for the plugin. Events
//! emitted through `tracing` macros are formatted and written to a rotating
//! log file for offline debugging, since a Zellij plugin has no terminal of
//! its own to log to.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → fmt layer → FileWriter → mealdeck.log
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: Logs written to `~/.local/share/zellij/mealdeck/mealdeck.log`
//! - **Automatic Rotation**: Files rotate at 5MB with 2-backup retention
//! - **Shared Sink**: Plugin thread and worker thread log to the same file
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` option in plugin
//! configuration; default is `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
