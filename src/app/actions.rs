//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or system events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing HTTP requests through the host or communicating with the storage
//! worker.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in sequence.

use crate::domain::Ingredient;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by [`handle_event`](crate::app::handle_event) and
/// executed by the shim in `main.rs`. They are the only way the library layer
/// reaches the network, the worker thread, or the pane itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Asks the host to issue one HTTP GET against the filter endpoint.
    ///
    /// `request_id` is the monotonic fetch generation assigned by the handler.
    /// The shim threads it through the request context so the completion event
    /// can be matched back to the fetch that is still current; completions
    /// carrying an older id are discarded.
    StartFetch {
        /// Fetch generation this request belongs to.
        request_id: u64,
        /// Ingredient to filter by.
        ingredient: Ingredient,
    },

    /// Posts a message to the background storage worker.
    ///
    /// Keeps settings writes and liked-list appends off the event loop.
    PostToWorker(WorkerMessage),
}
