//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like selection flags and position
//! counters.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI. The view
/// model is computed from `AppState` and carries the body of whichever screen
/// is active plus the shared header and footer.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, branding).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Body of the active screen.
    pub body: ScreenBody,
}

/// Body content for the active screen.
#[derive(Debug, Clone)]
pub enum ScreenBody {
    /// Home screen: ingredient picker, dish card, transient notice.
    Home {
        /// Picker entries, one per fixed ingredient.
        ingredients: Vec<IngredientEntry>,

        /// The dish under review, or a status message in its place.
        card: CardBody,

        /// Transient one-line notice ("Liked!").
        notice: Option<String>,
    },

    /// Liked screen: liked meals windowed to the pane height.
    Liked {
        /// Visible liked entries, in like order.
        items: Vec<LikedItem>,

        /// Liked entries that did not fit in the pane.
        hidden_count: usize,
    },
}

/// One entry in the ingredient picker bar.
#[derive(Debug, Clone)]
pub struct IngredientEntry {
    /// Key that selects this ingredient ('1' through '6').
    pub key: char,

    /// Display name (e.g., "Chicken").
    pub label: String,

    /// Whether this ingredient was the most recent selection.
    pub is_selected: bool,
}

/// The card area of the home screen.
#[derive(Debug, Clone)]
pub enum CardBody {
    /// A dish is under review.
    Dish(CardInfo),

    /// No dish to show; a status message takes the card's place.
    Status(StatusInfo),
}

/// Display information for the dish under review.
#[derive(Debug, Clone)]
pub struct CardInfo {
    /// Dish name.
    pub name: String,

    /// Thumbnail URL, shown as a link line.
    pub thumb: String,

    /// Position counter (e.g., "3 of 14").
    pub position: String,
}

/// Status message display information.
///
/// Shown in the card area while loading, after an empty result, after a
/// failure, or once the queue is exhausted.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// Primary message (e.g., "Loading...").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Whether to render in the error color.
    pub is_error: bool,
}

/// One row of the liked-meals list.
#[derive(Debug, Clone)]
pub struct LikedItem {
    /// Dish name.
    pub name: String,

    /// Thumbnail URL.
    pub thumb: String,
}

/// Header display information.
///
/// Contains title and branding information for the top of the UI.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
///
/// Contains help text and keybinding hints for the bottom of the UI.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit | Tab: liked").
    pub keybindings: String,
}
