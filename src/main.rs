//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Mealdeck
//! library and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! The plugin uses Zellij's worker thread support for background storage:
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  MealdeckWorker  │   │  ← Background processing
//! │  │ (worker thread)  │   │  ← Storage operations
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! HTTP fetches go through the host's `web_request` API; the completion comes
//! back as a `WebRequestResult` event on the main thread.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `CustomMessage`, `WebRequestResult`
//!    events
//! 3. **Hydrate**: Post `LoadState` to the worker once permissions arrive
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Worker Communication
//!
//! Messages between plugin and worker use JSON serialization:
//!
//! - Plugin → Worker: [`WorkerMessage`] (`LoadState`, `SetDarkMode`, `AppendLiked`)
//! - Worker → Plugin: [`WorkerResponse`] (`StateLoaded`, error details)
//!
//! # Keybindings
//!
//! Home screen:
//! - `1`-`6`: Pick an ingredient and fetch meals
//! - `x`/`Left`: Reject the current meal
//! - `l`/`Right`: Like the current meal
//! - `Tab`: Show liked meals
//! - `d`: Toggle dark mode
//! - `q`: Close plugin
//!
//! Liked screen:
//! - `Tab`/`Esc`: Back to home
//! - `d`: Toggle dark mode
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use mealdeck::worker::{MealdeckWorker, WorkerMessage, WorkerResponse};
use mealdeck::{classify_response, filter_url, handle_event, Action, Config, Event, Screen};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(MealdeckWorker, mealdeck_worker, MEALDECK_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication and the configured API base.
struct State {
    /// Core application state from library layer.
    app: mealdeck::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Base URL of TheMealDB API, from configuration.
    api_base: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: mealdeck::initialize(&default_config),
            worker_name: "mealdeck".to_string(),
            api_base: default_config.api_base,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Issue HTTP requests to TheMealDB
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `CustomMessage`: Worker responses
    /// - `WebRequestResult`: Fetch completions
    /// - `PermissionRequestResult`: Permission grant, triggers hydration
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        mealdeck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(api_base = %config.api_base, "parsed configuration");
        self.app = mealdeck::initialize(&config);
        self.api_base.clone_from(&config.api_base);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in rows
    /// * `cols` - Terminal width in columns
    fn render(&mut self, rows: usize, cols: usize) {
        mealdeck::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        Some(match key.bare_key {
            BareKey::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                let ingredient = mealdeck::Ingredient::from_index(index)?;
                Event::SelectIngredient(ingredient)
            }
            BareKey::Left | BareKey::Char('x') => Event::Reject,
            BareKey::Right | BareKey::Char('l') => Event::Like,
            BareKey::Tab => match self.app.screen {
                Screen::Home => Event::ShowLiked,
                Screen::Liked => Event::ShowHome,
            },
            BareKey::Esc => Event::ShowHome,
            BareKey::Char('d') => Event::ToggleDarkMode,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// Hydration waits for the grant: the worker's first storage access would
    /// otherwise race the permission prompt.
    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading persisted state");
                self.post_worker_message(&WorkerMessage::LoadState);
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - fetches will fail");
                self.post_worker_message(&WorkerMessage::LoadState);
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => {
                    tracing::debug!(response = ?response, "worker response received");
                    Some(Event::WorkerResponse(response))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Maps web request completions to application events.
    ///
    /// The request context carries the fetch generation assigned when the
    /// request was issued; results without a parseable id are dropped since
    /// they cannot be matched to a fetch.
    fn map_web_request_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let request_id = match context.get("request_id").and_then(|id| id.parse().ok()) {
            Some(id) => id,
            None => {
                tracing::debug!("web request result without request id, dropping");
                return None;
            }
        };

        tracing::debug!(
            status = status,
            body_len = body.len(),
            request_id = request_id,
            ingredient = ?context.get("ingredient"),
            "web request completed"
        );

        Some(Event::FetchCompleted {
            request_id,
            outcome: classify_response(status, body),
        })
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    ///
    /// # Errors
    ///
    /// Logs serialization errors but does not propagate them.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `StartFetch`: Issue an HTTP GET through the host
    /// - `PostToWorker`: Send IPC message to worker thread
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::StartFetch {
                request_id,
                ingredient,
            } => {
                let url = filter_url(&self.api_base, *ingredient);
                tracing::debug!(url = %url, request_id = request_id, "issuing web request");

                let mut context = BTreeMap::new();
                context.insert("request_id".to_string(), request_id.to_string());
                context.insert("ingredient".to_string(), ingredient.to_string());

                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
        }
    }
}
