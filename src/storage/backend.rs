//! Storage backend abstraction.
//!
//! The worker talks to storage through this trait so the JSON file backend can
//! be swapped out (and faked in tests) without touching the worker logic.

use super::models::{LikedRecord, StoredState};
use crate::domain::Result;

/// Persistent store for user settings and the liked list.
///
/// Implementations run on the background worker thread, never on the plugin's
/// update thread, so blocking file IO here is fine.
pub trait Storage: Send {
    /// Loads the full persisted state.
    ///
    /// A missing state file is not an error: implementations return the
    /// defaults (light mode, no likes) so a first launch behaves like an
    /// empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&mut self) -> Result<StoredState>;

    /// Persists the dark-mode flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the state file cannot be written.
    fn set_dark_mode(&mut self, dark: bool) -> Result<()>;

    /// Appends one liked meal to the persisted list.
    ///
    /// Duplicates are allowed; order of appends is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the state file cannot be written.
    fn append_liked(&mut self, record: &LikedRecord) -> Result<()>;
}
