//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker thread that handles storage
//! operations. Messages travel as JSON payloads through Zellij's worker API.

use crate::storage::LikedRecord;
use serde::{Deserialize, Serialize};

/// Messages sent from the main thread to the worker thread.
///
/// Each variant corresponds to a storage operation that should be performed
/// asynchronously, keeping file IO off the plugin's update thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the persisted state (settings + liked list) from storage.
    ///
    /// Sent once at startup; the response hydrates the app state.
    LoadState,

    /// Persist the dark-mode flag.
    SetDarkMode {
        /// New value of the flag.
        dark: bool,
    },

    /// Append one liked meal to the persisted list.
    AppendLiked {
        /// The meal as it should be stored.
        record: LikedRecord,
    },
}

/// Responses sent from the worker thread back to the main thread.
///
/// Each variant corresponds to the completion of a worker operation, either
/// successfully with result data or with an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Persisted state was successfully loaded.
    StateLoaded {
        /// Persisted dark-mode flag.
        dark_mode: bool,

        /// Liked meals in like order.
        liked: Vec<LikedRecord>,
    },

    /// The dark-mode flag was persisted.
    DarkModeSaved {
        /// The value that was written.
        dark: bool,
    },

    /// A liked meal was appended to the persisted list.
    LikedAppended {
        /// Total liked meals after the append.
        count: usize,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
