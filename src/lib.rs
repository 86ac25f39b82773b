//! Mealdeck: A Zellij plugin for browsing meal ideas by main ingredient.
//!
//! Mealdeck is a terminal multiplexer plugin that provides:
//! - A fixed picker of six main ingredients (Chicken, Beef, Pork, Potato,
//!   Cheese, Salmon)
//! - Meal suggestions fetched from TheMealDB's filter-by-ingredient API
//! - One-at-a-time review with like/reject controls
//! - A persistent liked-meals list backed by JSON file storage
//! - A persisted light/dark theme preference
//! - Asynchronous storage writes via Zellij worker threads
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Gateway Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (gateway/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Filter URLs │   │ - Storage I/O │
//! │ - Theming     │   │ - Response    │   │ - IPC bridge  │
//! │ - Components  │   │   classifying │   │ (storage/)    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Meal and Ingredient models (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Structured logging to rotating file              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Meal, Ingredient, errors)
//! - [`gateway`]: TheMealDB request building and response classification
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON file persistence for settings and liked meals
//! - [`worker`]: Background worker for async storage writes
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: File-based structured logging (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/mealdeck.wasm" {
//!         api_base "https://www.themealdb.com/api/json/v1/1/"
//!         light_theme_file "~/.config/mealdeck/light.toml"
//!         dark_theme_file "~/.config/mealdeck/dark.toml"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` with the light/dark theme pair
//!    - Subscribe to Zellij events and request web access
//!    - Post initial `LoadState` message to the worker
//!
//! 2. **Hydration**:
//!    - Worker loads settings and liked meals from the JSON file
//!    - `StateLoaded` response applies the persisted theme and liked list
//!
//! 3. **Review Loop**:
//!    - Keys 1-6 start a fetch through the host's `web_request`
//!    - The completion event is classified and resets the review queue
//!    - Likes append to the collection and queue a storage write
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, picker, card, footer)

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod gateway;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FetchStatus, Screen};
pub use domain::{Ingredient, Meal, MealdeckError, Result};
pub use gateway::{classify_response, filter_url, FetchOutcome};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/mealdeck.wasm" {
///     api_base "https://www.themealdb.com/api/json/v1/1/"
///     light_theme_file "/path/to/light.toml"
///     dark_theme_file "/path/to/dark.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of TheMealDB API.
    ///
    /// Default: the free v1 test endpoint. Override to pin a different API
    /// version or point at a mirror.
    pub api_base: String,

    /// Path to a custom TOML theme used while dark mode is off.
    ///
    /// Falls back to the built-in light theme when unset or unreadable.
    pub light_theme_file: Option<String>,

    /// Path to a custom TOML theme used while dark mode is on.
    ///
    /// Falls back to the built-in dark theme when unset or unreadable.
    pub dark_theme_file: Option<String>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: gateway::DEFAULT_API_BASE.to_string(),
            light_theme_file: None,
            dark_theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts values with fallback
    /// defaults.
    ///
    /// # Parameters
    ///
    /// * `config` - Configuration map from Zellij
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use mealdeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_base = config
            .get("api_base")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| gateway::DEFAULT_API_BASE.to_string());

        Self {
            api_base,
            light_theme_file: config.get("light_theme_file").cloned(),
            dark_theme_file: config.get("dark_theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Loads a theme variant from an optional file override.
///
/// Falls back to the built-in theme for the mode when the override is unset
/// or fails to load.
fn load_theme(file: Option<&String>, dark: bool) -> Theme {
    file.map_or_else(
        || Theme::from_mode(dark),
        |path| {
            let expanded = infrastructure::expand_tilde(path);
            Theme::from_file(&expanded).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using built-in");
                Theme::from_mode(dark)
            })
        },
    )
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - The light/dark theme pair (from files or built-ins)
/// - Empty review queue and liked collection (hydrated later by the worker)
///
/// The light theme starts active; the persisted dark-mode flag is applied
/// once the worker's `StateLoaded` response arrives.
///
/// # Parameters
///
/// * `config` - Plugin configuration
///
/// # Returns
///
/// An initialized `AppState` ready for event processing.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base = %config.api_base, "initializing mealdeck plugin");

    let light_theme = load_theme(config.light_theme_file.as_ref(), false);
    let dark_theme = load_theme(config.dark_theme_file.as_ref(), true);

    AppState::new(light_theme, dark_theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_themealdb() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://www.themealdb.com/api/json/v1/1/");
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn from_zellij_overrides_api_base() {
        let mut map = BTreeMap::new();
        map.insert("api_base".to_string(), "https://example.com/v2/".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.api_base, "https://example.com/v2/");
    }

    #[test]
    fn blank_api_base_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("api_base".to_string(), "   ".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.api_base, gateway::DEFAULT_API_BASE);
    }

    #[test]
    fn initialize_starts_in_light_mode() {
        let state = initialize(&Config::default());
        assert!(!state.dark_mode);
        assert_eq!(state.theme.name, "light");
        assert_eq!(state.dark_theme.name, "dark");
    }

    #[test]
    fn missing_theme_file_falls_back_to_built_in() {
        let config = Config {
            dark_theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.dark_theme.name, "dark");
    }
}
