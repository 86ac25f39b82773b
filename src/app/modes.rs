//! Screen and fetch-status state types for the application.
//!
//! This module defines the enums that drive conditional rendering. There is no
//! direct view-visibility toggling anywhere in the plugin: the active screen is
//! a value, and rendering is a projection of it.

use crate::domain::Ingredient;

/// The screen currently shown.
///
/// Navigation events flip this value; the renderer draws whichever screen is
/// active. Returning to `Home` never triggers a re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Ingredient picker, dish card, and like/reject controls.
    Home,

    /// List of liked meals (name + thumbnail per entry).
    Liked,
}

/// Progress of the most recent ingredient fetch.
///
/// Drives the status area of the home screen. Only `Ready` shows the dish card;
/// the other variants show a status message in its place. `NoResults` and
/// `Failed` deliberately leave the review queue as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch has been issued yet; the UI prompts for an ingredient.
    Idle,

    /// A fetch for this ingredient is in flight.
    Loading(Ingredient),

    /// The last fetch succeeded; the review queue drives the card area.
    Ready,

    /// The API found no meals for this ingredient.
    NoResults(Ingredient),

    /// The last fetch failed (transport or decode error).
    Failed,
}
