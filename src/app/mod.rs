//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/storage/worker layers. It implements
//! the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └── Fetch / Worker Completions ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`liked`]: Append-only collection of liked meals
//! - [`modes`]: Screen and fetch-status state machine types
//! - [`review`]: Forward-only review queue over fetched meals
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod liked;
pub mod modes;
pub mod review;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use liked::LikedCollection;
pub use modes::{FetchStatus, Screen};
pub use review::ReviewQueue;
pub use state::AppState;
