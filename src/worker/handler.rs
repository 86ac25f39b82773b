//! Worker thread implementation for asynchronous storage operations.
//!
//! This module implements the Zellij worker thread interface, handling all
//! storage operations asynchronously to avoid blocking the main plugin
//! rendering loop.

use crate::domain::error::{MealdeckError, Result};
use crate::infrastructure::paths;
use crate::storage::backend::Storage;
use crate::storage::{JsonStorage, LikedRecord};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling storage operations.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the main plugin thread. The storage backend is
/// initialized lazily on first message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct MealdeckWorker {
    /// Storage backend, initialized lazily on first use.
    #[serde(skip)]
    storage: Option<Box<dyn Storage>>,
}

impl MealdeckWorker {
    /// Creates a new worker with an initialized storage backend.
    ///
    /// Uses JSON file storage for persisting settings and liked meals.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let path = paths::get_data_dir().join("mealdeck.json");
        let storage: Box<dyn Storage> = Box::new(JsonStorage::new(path)?);
        Ok(Self {
            storage: Some(storage),
        })
    }

    /// Returns a mutable reference to the storage backend, failing if not initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage has not been initialized yet.
    fn get_storage(&mut self) -> Result<&mut Box<dyn Storage>> {
        self.storage
            .as_mut()
            .ok_or_else(|| MealdeckError::Worker("Storage not initialized".to_string()))
    }

    /// Helper for handling storage operation results with consistent logging.
    ///
    /// This function standardizes error handling and success logging across all
    /// storage operations in the worker.
    fn handle_db_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "storage operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadState` message.
    ///
    /// Retrieves the persisted settings and liked list from storage.
    fn handle_load_state(&mut self) -> WorkerResponse {
        Self::handle_db_result(
            "load state",
            self.get_storage().and_then(|storage| storage.load()),
            |state| {
                tracing::debug!(
                    dark_mode = state.dark_mode,
                    liked_count = state.liked.len(),
                    "state loaded from storage"
                );
                WorkerResponse::StateLoaded {
                    dark_mode: state.dark_mode,
                    liked: state.liked,
                }
            },
        )
    }

    /// Handles the `SetDarkMode` message.
    fn handle_set_dark_mode(&mut self, dark: bool) -> WorkerResponse {
        Self::handle_db_result(
            "set dark mode",
            self.get_storage()
                .and_then(|storage| storage.set_dark_mode(dark)),
            |()| {
                tracing::debug!(dark = dark, "dark mode saved");
                WorkerResponse::DarkModeSaved { dark }
            },
        )
    }

    /// Handles the `AppendLiked` message.
    fn handle_append_liked(&mut self, record: LikedRecord) -> WorkerResponse {
        let meal_name = record.name.clone();

        let append_and_count = |storage: &mut Box<dyn Storage>| -> Result<usize> {
            storage.append_liked(&record)?;
            Ok(storage.load()?.liked.len())
        };

        Self::handle_db_result(
            "append liked",
            self.get_storage().and_then(append_and_count),
            |count| {
                tracing::debug!(meal_name = %meal_name, liked_count = count, "liked meal saved");
                WorkerResponse::LikedAppended { count }
            },
        )
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// This is the main message handling entry point, dispatching to specific
    /// handlers based on the message variant.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadState => self.handle_load_state(),

            WorkerMessage::SetDarkMode { dark } => self.handle_set_dark_mode(dark),

            WorkerMessage::AppendLiked { record } => self.handle_append_liked(record),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring logs
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
///
/// Used to ensure tracing is only set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for MealdeckWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Lazy-initializes the storage backend if needed
    /// 3. Deserializes the message payload
    /// 4. Processes the message via `handle_message`
    /// 5. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if self.storage.is_none() {
            match Self::new() {
                Ok(worker) => {
                    self.storage = worker.storage;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize storage");
                    let error_response = WorkerResponse::Error {
                        message: format!("Failed to initialize storage: {e}"),
                    };
                    if let Ok(payload) = serde_json::to_string(&error_response) {
                        post_message_to_plugin(PluginMessage {
                            name: message,
                            payload,
                            worker_name: None,
                        });
                    }
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                let plugin_message = PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                };
                post_message_to_plugin(plugin_message);
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoredState;

    /// In-memory storage fake for exercising the message handlers.
    #[derive(Default)]
    struct MemoryStorage {
        state: StoredState,
        fail_writes: bool,
    }

    impl Storage for MemoryStorage {
        fn load(&mut self) -> Result<StoredState> {
            Ok(self.state.clone())
        }

        fn set_dark_mode(&mut self, dark: bool) -> Result<()> {
            if self.fail_writes {
                return Err(MealdeckError::Storage("disk full".to_string()));
            }
            self.state.dark_mode = dark;
            Ok(())
        }

        fn append_liked(&mut self, record: &LikedRecord) -> Result<()> {
            if self.fail_writes {
                return Err(MealdeckError::Storage("disk full".to_string()));
            }
            self.state.liked.push(record.clone());
            Ok(())
        }
    }

    fn worker_with(storage: MemoryStorage) -> MealdeckWorker {
        MealdeckWorker {
            storage: Some(Box::new(storage)),
        }
    }

    fn record(id: &str) -> LikedRecord {
        LikedRecord {
            meal_id: id.to_string(),
            name: format!("Meal {id}"),
            thumb: format!("https://example.com/{id}.jpg"),
            liked_at: 1_700_000_000,
        }
    }

    #[test]
    fn load_state_returns_settings_and_likes() {
        let mut worker = worker_with(MemoryStorage {
            state: StoredState {
                dark_mode: true,
                liked: vec![record("1")],
            },
            fail_writes: false,
        });

        let response = worker.handle_message(WorkerMessage::LoadState);
        let WorkerResponse::StateLoaded { dark_mode, liked } = response else {
            panic!("expected StateLoaded");
        };
        assert!(dark_mode);
        assert_eq!(liked.len(), 1);
    }

    #[test]
    fn set_dark_mode_round_trips_through_storage() {
        let mut worker = worker_with(MemoryStorage::default());

        let response = worker.handle_message(WorkerMessage::SetDarkMode { dark: true });
        assert_eq!(response, WorkerResponse::DarkModeSaved { dark: true });

        let response = worker.handle_message(WorkerMessage::LoadState);
        let WorkerResponse::StateLoaded { dark_mode, .. } = response else {
            panic!("expected StateLoaded");
        };
        assert!(dark_mode);
    }

    #[test]
    fn append_liked_reports_running_count() {
        let mut worker = worker_with(MemoryStorage::default());

        let response = worker.handle_message(WorkerMessage::AppendLiked { record: record("1") });
        assert_eq!(response, WorkerResponse::LikedAppended { count: 1 });

        let response = worker.handle_message(WorkerMessage::AppendLiked { record: record("2") });
        assert_eq!(response, WorkerResponse::LikedAppended { count: 2 });
    }

    #[test]
    fn storage_failure_becomes_error_response() {
        let mut worker = worker_with(MemoryStorage {
            state: StoredState::default(),
            fail_writes: true,
        });

        let response = worker.handle_message(WorkerMessage::SetDarkMode { dark: true });
        let WorkerResponse::Error { message } = response else {
            panic!("expected Error");
        };
        assert!(message.contains("set dark mode"));
    }
}
